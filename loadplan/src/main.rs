use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use loadplan::config::LPConfig;
use loadplan::io::cli::Cli;
use loadplan::io::cross_section_svg::{bundle_to_svg, truck_to_svg};
use loadplan::io::output::PlanOutput;
use loadplan::io::read_order;
use loadplan::planner::LoadPlanner;
use loadplan::{EPOCH, io};
use matryoshka::io::ext_repr::ExtOrder;
use matryoshka::io::import::Importer;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            LPConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed LPConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_order = read_order(args.input_file.as_path())?;
    main_plan(ext_order, config, &input_file_stem, args.solution_folder)
}

fn main_plan(
    ext_order: ExtOrder,
    config: LPConfig,
    input_stem: &str,
    output_folder: PathBuf,
) -> Result<()> {
    let order = Importer::new()
        .import_order(&ext_order)
        .with_context(|| format!("could not import order {}", ext_order.name))?;
    let planner = LoadPlanner::new(config);
    let result = planner.solve(&order);
    let plan = planner.report(&order, &result);

    for warning in &plan.warnings {
        warn!("[MAIN] {warning}");
    }

    {
        let output = PlanOutput {
            order: ext_order,
            plan,
            config,
        };
        let plan_path = output_folder.join(format!("plan_{input_stem}.json"));
        io::write_json(&output, &plan_path)?;
    }

    let options = config.svg_draw_options;
    let clearance = config.nesting.clearance;
    for truck in &result.trucks {
        let n = truck.truck_number;
        if options.trucks {
            let svg_path = output_folder.join(format!("plan_{input_stem}_truck_{n}.svg"));
            let svg = truck_to_svg(truck, options, &clearance, config.packing.stack_gap_mm);
            io::write_svg(&svg, &svg_path)?;
        }
        if options.bundles {
            for (k, bundle) in truck.bundles.iter().filter(|b| b.is_nested()).enumerate() {
                let svg_path =
                    output_folder.join(format!("plan_{input_stem}_truck_{n}_bundle_{}.svg", k + 1));
                io::write_svg(&bundle_to_svg(bundle, options, &clearance), &svg_path)?;
            }
        }
    }

    info!(
        "[MAIN] finished in {:.3}s",
        EPOCH.elapsed().as_secs_f64()
    );
    Ok(())
}
