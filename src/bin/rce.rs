use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rce_rs::models::Country;
use rce_rs::{Client, details, render, storage};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "rce",
    version,
    about = "Explore, render & export country data from the REST Countries API"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the countries of a region.
    Region(RegionArgs),
    /// Show the detail panel for one country (exact name match).
    Details(DetailsArgs),
    /// List countries matching a demonym.
    Demonym(DemonymArgs),
    /// Field-filtered query against any listing endpoint.
    Search(SearchArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct RegionArgs {
    /// Region name (e.g., europe, asia, americas)
    #[arg(short, long)]
    region: String,
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Locale tag for number formatting (e.g., en or de).
    #[arg(long, default_value = "en")]
    locale: String,
}

#[derive(Args, Debug)]
struct DetailsArgs {
    /// Country name, matched exactly (e.g., "France", "Costa Rica")
    #[arg(short, long)]
    name: String,
    /// Locale tag for number formatting (e.g., en or de).
    #[arg(long, default_value = "en")]
    locale: String,
}

#[derive(Args, Debug)]
struct DemonymArgs {
    /// Demonym to search for (e.g., french)
    #[arg(short, long)]
    demonym: String,
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Locale tag for number formatting (e.g., en or de).
    #[arg(long, default_value = "en")]
    locale: String,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Endpoint path to query (e.g., all, region/europe, subregion/Caribbean)
    #[arg(short, long)]
    service: String,
    /// Fields to request, separated by comma or semicolon (e.g., name,capital,population)
    #[arg(short, long)]
    fields: String,
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Locale tag for number formatting (e.g., en or de).
    #[arg(long, default_value = "en")]
    locale: String,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn save_listing(countries: &[Country], path: &Path, format: Option<OutFormat>) -> Result<()> {
    let fmt = match format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_csv(countries, path)?,
        "json" => storage::save_json(countries, path)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} countries to {}", countries.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Region(args) => cmd_region(args),
        Command::Details(args) => cmd_details(args),
        Command::Demonym(args) => cmd_demonym(args),
        Command::Search(args) => cmd_search(args),
    }
}

fn cmd_region(args: RegionArgs) -> Result<()> {
    let client = Client::default();
    let countries = client.by_region(&args.region)?;
    if countries.is_empty() {
        anyhow::bail!("Region not found");
    }

    let (locale, _) = render::map_locale(&args.locale);
    println!("Found {} countries in {}", countries.len(), args.region);
    println!();
    for c in &countries {
        println!("{}", render::region_card(c, locale));
    }

    if let Some(path) = args.out.as_ref() {
        save_listing(&countries, path, args.format)?;
    }
    Ok(())
}

fn cmd_details(args: DetailsArgs) -> Result<()> {
    let client = Client::default();
    let view = details::get_details(&client, &args.name)?;
    let (locale, dec) = render::map_locale(&args.locale);
    println!("{}", render::detail_panel(&view, locale, dec));
    Ok(())
}

fn cmd_demonym(args: DemonymArgs) -> Result<()> {
    if args.demonym.trim().is_empty() {
        anyhow::bail!("Please enter a demonym.");
    }

    let client = Client::default();
    let countries = client.by_demonym(&args.demonym)?;
    if countries.is_empty() {
        anyhow::bail!("No countries found for this demonym");
    }

    let (locale, _) = render::map_locale(&args.locale);
    println!(
        "Found {} countries with demonym \"{}\"",
        countries.len(),
        args.demonym
    );
    println!();
    for c in &countries {
        println!("{}", render::demonym_card(c, locale));
    }

    if let Some(path) = args.out.as_ref() {
        save_listing(&countries, path, args.format)?;
    }
    Ok(())
}

fn cmd_search(args: SearchArgs) -> Result<()> {
    let fields = parse_list(&args.fields);
    if args.service.trim().is_empty() || fields.is_empty() {
        anyhow::bail!("Please enter both service and fields.");
    }

    let client = Client::default();
    let countries = client.search(&args.service, &fields)?;
    if countries.is_empty() {
        anyhow::bail!("Invalid request or no data found");
    }

    let (locale, _) = render::map_locale(&args.locale);
    println!("Found {} results", countries.len());
    println!();
    for c in &countries {
        println!("{}", render::search_card(c, locale));
    }

    if let Some(path) = args.out.as_ref() {
        save_listing(&countries, path, args.format)?;
    }
    Ok(())
}
