/*! Integration tests for anyobject.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - doc: Tests for Document, path resolution, typed getters, views and JSON
 * - config: Tests for AccessConfig driven construction
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("anyobject=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}
