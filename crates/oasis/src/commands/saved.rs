//! Saved-set command handlers.

use oasis_core::Directory;
use oasis_core::hours::is_open_now;

use crate::cli::{GlobalOpts, SavedArgs, SavedCommand};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    directory: &Directory,
    args: SavedArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SavedCommand::List => {
            let saved = directory.saved_resources().await?;
            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &saved,
                |r| SavedRow {
                    id: r.id.clone(),
                    name: r.name.clone(),
                    category: r.primary_category().unwrap_or_default().into(),
                    open: output::open_badge(is_open_now(&r.hours), color),
                },
                |r| r.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SavedCommand::Add { id } => {
            directory.save(&id).await?;
            if !global.quiet {
                eprintln!("Saved resource {id}");
            }
            Ok(())
        }

        SavedCommand::Remove { id } => {
            directory.unsave(&id).await?;
            if !global.quiet {
                eprintln!("Removed resource {id} from saved set");
            }
            Ok(())
        }
    }
}

#[derive(tabled::Tabled)]
struct SavedRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Open")]
    open: String,
}
