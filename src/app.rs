use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    controllers::Controllers,
    domain, infra, nav, ui,
    usecases::{self, bootstrap, compose},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref(), cli.role.as_deref())?;

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                nav = nav::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let controllers = Controllers::seeded();
            let mut shell = compose::compose_shell(&context, &controllers);
            let mut event_source = ui::CrosstermEventSource::default();

            ui::shell::start(&mut shell, &mut event_source)?;
        }
    }

    Ok(())
}
