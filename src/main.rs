//! Command-line interface for the payroll engine

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use log::warn;

use payroll_system::ecr::{
    self, csv_filename, decode_file, ecr_filename, encode_file,
};
use payroll_system::import::{import_table, template_csv, RawTable, TEMPLATE_FILENAME};
use payroll_system::pf::compute_pf;
use payroll_system::store::JsonFileStore;
use payroll_system::{EmployeeStore, PfStore};

#[derive(Parser)]
#[command(name = "payroll", version, about = "Payroll ingestion and PF/ECR engine")]
struct Cli {
    /// Directory holding the persisted application state
    #[arg(long, default_value = ".payroll", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the starter CSV template
    Template {
        /// Output path (defaults to the standard template filename)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Import a payroll CSV or spreadsheet into the employee store
    Import {
        /// Input file (.csv, .xlsx or .xls)
        file: PathBuf,
    },

    /// Compute the PF contribution breakdown for a gross wage
    Pf {
        /// Monthly gross wages
        gross: f64,
    },

    /// Export the stored employees' PF data as an ECR text file
    EcrExport {
        /// Return month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,

        /// Return year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Output path (defaults to ECR_<Month>_<Year>.txt)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Decode an ECR text file and print its contents and totals
    EcrImport {
        file: PathBuf,
    },

    /// Export the stored employees' PF data as a CSV file
    CsvExport {
        /// Return month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,

        /// Return year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Output path (defaults to PF_Data_<Month>_<Year>.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut kv = JsonFileStore::new(&cli.data_dir);

    match cli.command {
        Command::Template { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(TEMPLATE_FILENAME));
            fs::write(&path, template_csv())
                .with_context(|| format!("writing template to {}", path.display()))?;
            println!("Template written to {}", path.display());
        }

        Command::Import { file } => {
            let table = RawTable::from_path(&file)
                .with_context(|| format!("reading {}", file.display()))?;

            let mut store = EmployeeStore::load_from(&kv)?;
            let summary = import_table(&table, store.company(), store.len())?;

            for warning in &summary.warnings {
                println!("warning: {warning}");
            }
            println!(
                "Imported {} employees ({} rows skipped)",
                summary.records.len(),
                summary.skipped_rows
            );

            store.extend(summary.records);
            store.save_to(&mut kv)?;
        }

        Command::Pf { gross } => {
            let pf = compute_pf(gross);
            println!("PF wages:          {:>10.0}", pf.pf_wages);
            println!("EPF (employee):    {:>10.0}", pf.epf_employee);
            println!("EPS (employer):    {:>10.0}", pf.eps_contribution);
            println!("EPF (employer):    {:>10.0}", pf.epf_employer);
            println!("EDLI:              {:>10.0}", pf.edli_contribution);
            println!("Admin charge:      {:>10.0}", pf.admin_charge);
            println!("EDLI admin charge: {:>10.0}", pf.edli_admin_charge);
            println!("Employer total:    {:>10.0}", pf.total_employer);
            println!("Grand total:       {:>10.0}", pf.total);
            if pf.wages_capped {
                println!("(wages capped at the statutory ceiling)");
            }
        }

        Command::EcrExport { month, year, output } => {
            let store = EmployeeStore::load_from(&kv)?;
            let pf_store = pf_store_from_employees(&store);
            if pf_store.is_empty() {
                bail!("no employees with a valid UAN to export");
            }

            let (month, year) = resolve_period(month, year);
            let path = output.unwrap_or_else(|| PathBuf::from(ecr_filename(month, year)));
            let content = encode_file(pf_store.records(), Some(store.company()));
            fs::write(&path, content)
                .with_context(|| format!("writing ECR file to {}", path.display()))?;

            let totals = pf_store.totals();
            println!(
                "Exported {} members to {} (EPF {} / EPS {} / total {})",
                totals.employee_count,
                path.display(),
                totals.epf_employee,
                totals.eps_contribution,
                totals.total
            );
        }

        Command::EcrImport { file } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let decoded = if file.extension().and_then(|e| e.to_str()) == Some("csv") {
                ecr::csv::decode_csv(&content)?
            } else {
                decode_file(&content)?
            };

            let mut pf_store = PfStore::new();
            let outcome = pf_store.import_records(decoded);
            for warning in &outcome.warnings {
                println!("warning: {warning}");
            }
            if outcome.imported == 0 {
                bail!("no valid PF records in {}", file.display());
            }

            let totals = pf_store.totals();
            println!("Decoded {} members", totals.employee_count);
            println!("EPF wages total:   {:>12.0}", totals.epf_wages);
            println!("EPF (employee):    {:>12.0}", totals.epf_employee);
            println!("EPS (employer):    {:>12.0}", totals.eps_contribution);
            println!("EPF (employer):    {:>12.0}", totals.epf_employer);
            println!("Grand total:       {:>12.0}", totals.total);
        }

        Command::CsvExport { month, year, output } => {
            let store = EmployeeStore::load_from(&kv)?;
            let pf_store = pf_store_from_employees(&store);
            if pf_store.is_empty() {
                bail!("no employees with a valid UAN to export");
            }

            let (month, year) = resolve_period(month, year);
            let path = output.unwrap_or_else(|| PathBuf::from(csv_filename(month, year)));
            let content = ecr::csv::encode_csv(pf_store.records(), Some(store.company()));
            fs::write(&path, content)
                .with_context(|| format!("writing CSV file to {}", path.display()))?;
            println!(
                "Exported {} members to {}",
                pf_store.len(),
                path.display()
            );
        }
    }

    Ok(())
}

/// Build the PF record set from stored employees, skipping anyone without
/// a valid UAN
fn pf_store_from_employees(store: &EmployeeStore) -> PfStore {
    let mut pf_store = PfStore::new();
    for employee in store.employees() {
        let result = pf_store.upsert(&employee.uan, &employee.name, employee.gross);
        if !result.valid {
            warn!(
                "skipping {} for PF export: {}",
                employee.name,
                result.errors.join("; ")
            );
        }
    }
    pf_store
}

fn resolve_period(month: Option<u32>, year: Option<i32>) -> (u32, i32) {
    let today = chrono::Local::now().date_naive();
    (
        month.unwrap_or_else(|| today.month()),
        year.unwrap_or_else(|| today.year()),
    )
}
