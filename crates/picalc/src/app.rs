//! Application entry point and dispatch.

use anyhow::{Context, Result};

use picalc_cli::art::Canvas;
use picalc_cli::output::write_to_file;
use picalc_cli::presenter::CLIResultPresenter;
use picalc_core::constants::{exit_codes, DEFAULT_FORMULA};
use picalc_core::digits::DigitString;
use picalc_core::formula::PiError;
use picalc_core::registry::Registry;
use picalc_orchestration::driver::{Driver, Outcome};
use picalc_orchestration::interfaces::ResultPresenter;
use picalc_orchestration::request::{ComputationRequest, FormulaSelector, Mode};

use crate::config::AppConfig;
use crate::errors;

/// Run the application and return the process exit code.
///
/// Errors are reported through the presenter.
pub fn run(config: &AppConfig) -> i32 {
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.json);
    match execute(config, &presenter) {
        Ok(code) => code,
        Err(err) => {
            presenter.present_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    }
}

/// Dispatch on the configured mode.
pub fn execute(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        picalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let registry = Registry::builtin()?;
    let driver = Driver::new(&registry).with_options(config.options());

    if config.is_self_test() {
        return run_self_test(config, &driver, presenter);
    }
    if config.raw {
        return run_raw(config, &driver, presenter);
    }
    run_art(config, &driver)
}

fn produce_request(config: &AppConfig, precision: usize) -> ComputationRequest {
    ComputationRequest::new(
        config.formula.as_deref(),
        DEFAULT_FORMULA,
        precision,
        Mode::Produce,
    )
}

fn run_self_test(
    config: &AppConfig,
    driver: &Driver<'_>,
    presenter: &dyn ResultPresenter,
) -> Result<i32> {
    let selector = match &config.test_formula {
        Some(name) => FormulaSelector::parse(name),
        None => FormulaSelector::All,
    };

    let reports = config
        .test_precisions()
        .into_iter()
        .map(|precision| {
            driver
                .self_test(&ComputationRequest::self_test(selector.clone(), precision))
                .with_context(|| format!("self-test at {precision} digits failed"))
        })
        .collect::<Result<Vec<_>>>()?;
    presenter.present_reports(&reports);

    Ok(if reports.iter().all(|report| report.passed()) {
        exit_codes::SUCCESS
    } else {
        exit_codes::ERROR_MISMATCH
    })
}

fn run_raw(
    config: &AppConfig,
    driver: &Driver<'_>,
    presenter: &dyn ResultPresenter,
) -> Result<i32> {
    let request = produce_request(config, config.raw_precision());
    if config.output.is_some() && request.selector == FormulaSelector::All {
        return Err(PiError::UnsupportedRequest(
            "--output needs a single formula, not \"all\"".into(),
        )
        .into());
    }

    match driver.run(&request)? {
        Outcome::Digits(digits) => {
            if let Some(path) = &config.output {
                write_to_file(path, &digits)
                    .with_context(|| format!("cannot write {}", path.display()))?;
            } else {
                presenter.present_digits(&digits);
            }
        }
        Outcome::AllDigits(results) => presenter.present_all(&results),
        Outcome::Report(report) => presenter.present_reports(std::slice::from_ref(&report)),
    }
    Ok(exit_codes::SUCCESS)
}

fn run_art(config: &AppConfig, driver: &Driver<'_>) -> Result<i32> {
    let canvas = Canvas::load(
        &config.source_image,
        config.width,
        config.height,
        config.keep_aspect_ratio,
        config.inverted,
    )
    .with_context(|| format!("cannot prepare {}", config.source_image.display()))?;

    let needed = canvas.digits_needed();
    let digits = if needed == 0 {
        DigitString::from_digits("")
    } else {
        driver.compute(&produce_request(config, needed))?
    };

    println!("{}", canvas.render(&digits)?);
    Ok(exit_codes::SUCCESS)
}
