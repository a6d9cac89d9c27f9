//! Category command handlers.

use tabled::Tabled;

use oasis_core::{Category, Directory};

use crate::cli::{CategoriesArgs, CategoriesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Subcategories")]
    subcategories: String,
}

impl From<&Category> for CategoryRow {
    fn from(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            subcategories: c.subcategories.join(", "),
        }
    }
}

pub async fn handle(
    directory: &Directory,
    args: CategoriesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CategoriesCommand::List => {
            let categories = directory.categories().await?;
            let out = output::render_list(
                &global.output,
                &categories,
                |c| CategoryRow::from(c),
                |c| c.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
