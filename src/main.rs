use anyhow::Context;

use paginate::{
    configuration::get_configuration,
    pagination::PaginationQuery,
    telemetry::{get_subscriber, init_subscriber},
};

// usage: paginate <total> [page] [per_page]
// prints the json api form of the requested page plus its render parameters
fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration.")?;

    let subscriber = get_subscriber(
        configuration.application.name.clone(),
        configuration.application.log_level.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber);

    let mut args = std::env::args().skip(1);
    let total: u64 = args
        .next()
        .context("Missing <total> argument")?
        .parse()
        .context("<total> must be a non-negative integer")?;
    let page = parse_optional(args.next(), "[page]")?.unwrap_or(1);
    let per_page = parse_optional(args.next(), "[per_page]")?;

    let settings = &configuration.pagination;
    let query = PaginationQuery::new(page, per_page);

    // stand-in rows: the absolute row numbers on this page
    let first = query.offset(settings).saturating_add(1);
    let last = query.offset(settings).saturating_add(query.limit(settings)).min(total);
    let rows: Vec<u64> = (first..=last).collect();

    let paginator = query.paginate(rows, total, settings);
    tracing::info!(
        total = %paginator.total(),
        current_page = %paginator.current_page(),
        last_page = %paginator.last_page(),
        "Paginated result set"
    );

    let output = serde_json::json!({
        "page": paginator.to_array(),
        "links": paginator.render_params(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn parse_optional(arg: Option<String>, name: &str) -> anyhow::Result<Option<u64>> {
    arg.map(|a| {
        a.parse::<u64>()
            .with_context(|| format!("{name} must be a positive integer"))
    })
    .transpose()
}
