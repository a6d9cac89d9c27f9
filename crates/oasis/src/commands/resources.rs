//! Resource command handlers: browse, detail, and admin CRUD.

use std::fmt::Write as _;

use tabled::Tabled;

use oasis_core::hours::is_open_now;
use oasis_core::{
    CostCeiling, Directory, FilterCriteria, Resource, SortKey, geo,
};

use crate::cli::{CostCeilingArg, GlobalOpts, ResourcesArgs, ResourcesCommand, SortKeyArg};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Open")]
    open: String,
}

impl ResourceRow {
    fn from(r: &Resource, color: bool) -> Self {
        Self {
            id: r.id.clone(),
            name: r.name.clone(),
            category: r.primary_category().unwrap_or_default().into(),
            cost: r.cost.map(|c| c.label().into()).unwrap_or_default(),
            city: r.city.clone(),
            open: output::open_badge(is_open_now(&r.hours), color),
        }
    }
}

// ── Argument conversions ────────────────────────────────────────────

impl From<CostCeilingArg> for CostCeiling {
    fn from(arg: CostCeilingArg) -> Self {
        match arg {
            CostCeilingArg::Free => Self::Free,
            CostCeilingArg::Low => Self::UpToLow,
            CostCeilingArg::Moderate => Self::UpToModerate,
            CostCeilingArg::High => Self::UpToHigh,
        }
    }
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Name => Self::Name,
            SortKeyArg::Cost => Self::Cost,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    directory: &Directory,
    args: ResourcesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ResourcesCommand::List {
            category,
            subcategory,
            cost,
            language,
            location,
            sort,
            saved,
        } => {
            let criteria = FilterCriteria {
                cost_ceiling: cost.map(CostCeiling::from).unwrap_or_default(),
                language: util::normalize_filter(language),
                city: util::normalize_filter(location),
                subcategory: util::normalize_filter(subcategory),
                sort: sort.into(),
            };

            let category = util::normalize_filter(category);
            let mut list = directory.browse(category.as_deref(), &criteria).await?;

            if saved {
                let saved_set = directory.saved_set().await?;
                list.retain(|r| saved_set.contains(&r.id));
            }

            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &list,
                |r| ResourceRow::from(r, color),
                |r| r.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ResourcesCommand::Get { id, from } => {
            let position = from.as_deref().map(util::parse_position).transpose()?;
            let resource = directory.resource(&id).await?;

            let color = output::should_color(&global.color);
            let out = output::render_single(
                &global.output,
                &resource,
                |r| render_detail(r, position, color),
                |r| r.id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ResourcesCommand::Create { from_file } => {
            let record = util::read_resource_file(&from_file)?;
            let created = directory.create_resource(record).await?;
            if !global.quiet {
                eprintln!("Resource created: {}", created.id);
            }
            Ok(())
        }

        ResourcesCommand::Update { id, from_file } => {
            let record = util::read_resource_file(&from_file)?;
            directory.update_resource(&id, record).await?;
            if !global.quiet {
                eprintln!("Resource updated");
            }
            Ok(())
        }

        ResourcesCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete resource '{id}'? This is destructive."),
                global.yes,
            )? {
                return Ok(());
            }
            directory.delete_resource(&id).await?;
            if !global.quiet {
                eprintln!("Resource deleted");
            }
            Ok(())
        }
    }
}

// ── Detail view ─────────────────────────────────────────────────────

/// Fixed-order detail rendering for `resources get`, mirroring the
/// list view fields first and the long-form fields after.
fn render_detail(r: &Resource, position: Option<(f64, f64)>, color: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", r.name);
    let _ = writeln!(out, "  ID:          {}", r.id);
    let _ = writeln!(
        out,
        "  Category:    {}",
        join_or_dash(&r.category)
    );
    if !r.subcategory.is_empty() {
        let _ = writeln!(out, "  Subcategory: {}", r.subcategory.join(", "));
    }
    let _ = writeln!(
        out,
        "  Cost:        {}",
        r.cost.map_or("-", |c| c.label())
    );
    if let Some(langs) = &r.languages {
        let _ = writeln!(out, "  Languages:   {}", join_or_dash(langs));
    }
    let _ = writeln!(out, "  Address:     {}", r.address_line());

    if let (Some((lat, lng)), Some((here_lat, here_lng))) = (r.coordinates(), position) {
        let km = geo::distance_km(here_lat, here_lng, lat, lng);
        let _ = writeln!(out, "  Distance:    {:.1} mi", geo::km_to_miles(km));
    }

    if !r.email.is_empty() {
        let _ = writeln!(out, "  Email:       {}", r.email);
    }
    if !r.website.is_empty() {
        let _ = writeln!(out, "  Website:     {}", r.website);
    }
    for phone in &r.phone_numbers {
        let _ = writeln!(out, "  Phone:       {}: {}", phone.phone_type, phone.number);
    }

    if !r.description.is_empty() {
        let _ = writeln!(out, "\n  {}", r.description);
    }
    if !r.eligibility.is_empty() {
        let _ = writeln!(out, "\n  Eligibility: {}", r.eligibility);
    }
    if !r.required_documents.is_empty() {
        let _ = writeln!(
            out,
            "  Documents:   {}",
            r.required_documents.join(", ")
        );
    }

    if let Some(aid) = &r.financial_aid {
        if !aid.is_empty() {
            let _ = writeln!(out, "\n  Financial aid:");
            let _ = writeln!(out, "    Education:   {}", dash_if_empty(&aid.education));
            let _ = writeln!(
                out,
                "    Immigration: {}",
                dash_if_empty(&aid.immigration_status)
            );
            let _ = writeln!(out, "    Deadline:    {}", dash_if_empty(&aid.deadline));
            let _ = writeln!(out, "    Amount:      {}", dash_if_empty(&aid.amount));
        }
    }

    if r.hours.is_empty() {
        let _ = writeln!(out, "\n  Hours: none on record");
    } else {
        let _ = writeln!(
            out,
            "\n  Hours ({} now):",
            output::open_badge(is_open_now(&r.hours), color)
        );
        for row in &r.hours {
            match &row.period {
                Some(p) => {
                    let _ = writeln!(out, "    {:<10} {} - {}", row.day.to_string(), p.open, p.close);
                }
                None => {
                    let _ = writeln!(out, "    {:<10} closed", row.day.to_string());
                }
            }
        }
    }

    out.trim_end().to_string()
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".into()
    } else {
        items.join(", ")
    }
}

fn dash_if_empty(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
