//! Given steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    world
        .install_empty_store()
        .wrap_err("build router over an empty in-memory store")
}
