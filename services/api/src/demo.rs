use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use clearpath_life::error::AppError;
use clearpath_life::estimator::{
    format_currency, recommend, CategorySelection, CostCatalog, DimeInputs, EstimateResult,
    EstimatorEngine, ServiceType,
};
use clearpath_life::leads::{
    summarize, ContactMessage, JobApplication, LeadIntakeService, LeadStatus, LeadSubmission,
    ProductLine, QuoteRequest,
};

use crate::infra::{InMemoryLeadRepository, InMemoryNotificationPublisher};

const DEMO_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ServiceTypeArg {
    Burial,
    Cremation,
}

impl From<ServiceTypeArg> for ServiceType {
    fn from(value: ServiceTypeArg) -> Self {
        match value {
            ServiceTypeArg::Burial => ServiceType::Burial,
            ServiceTypeArg::Cremation => ServiceType::Cremation,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct FinalExpenseArgs {
    /// Service family to estimate
    #[arg(long, value_enum, default_value_t = ServiceTypeArg::Burial)]
    pub(crate) service_type: ServiceTypeArg,
    /// Region key from the cost catalog
    #[arg(long, default_value = "national")]
    pub(crate) region: String,
    /// Category ids to leave out of the estimate (repeatable)
    #[arg(long = "exclude")]
    pub(crate) exclude: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct DimeArgs {
    /// Outstanding non-mortgage debt in dollars
    #[arg(long)]
    pub(crate) debt: u32,
    /// Gross annual income in dollars
    #[arg(long)]
    pub(crate) annual_income: u32,
    /// Years of income to replace
    #[arg(long)]
    pub(crate) years_to_replace: u8,
    /// Remaining mortgage balance in dollars
    #[arg(long)]
    pub(crate) mortgage_balance: u32,
    /// Anticipated education costs in dollars
    #[arg(long)]
    pub(crate) education_costs: u32,
    /// Existing life insurance coverage in dollars
    #[arg(long, default_value_t = 0)]
    pub(crate) existing_coverage: u32,
    /// Liquid savings in dollars
    #[arg(long, default_value_t = 0)]
    pub(crate) savings: u32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reporting date (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Region key used for the demo estimate
    #[arg(long, default_value = "national")]
    pub(crate) region: String,
    /// Skip the lead intake portion of the demo.
    #[arg(long)]
    pub(crate) skip_leads: bool,
}

pub(crate) fn run_final_expense_estimate(args: FinalExpenseArgs) -> Result<(), AppError> {
    let FinalExpenseArgs {
        service_type,
        region,
        exclude,
    } = args;

    let selection = exclude
        .iter()
        .fold(CategorySelection::all_included(), |selection, id| {
            selection.exclude(id)
        });

    let engine = EstimatorEngine::new(CostCatalog::standard());
    let result = engine.final_expense(service_type.into(), &region, &selection)?;

    println!("Final-expense estimate ({region})");
    render_estimate(&result);
    Ok(())
}

pub(crate) fn run_dime_estimate(args: DimeArgs) -> Result<(), AppError> {
    let DimeArgs {
        debt,
        annual_income,
        years_to_replace,
        mortgage_balance,
        education_costs,
        existing_coverage,
        savings,
    } = args;

    let engine = EstimatorEngine::new(CostCatalog::standard());
    let result = engine.dime(&DimeInputs {
        debt,
        annual_income,
        years_to_replace,
        mortgage_balance,
        education_costs,
        existing_coverage,
        savings,
    });

    println!("DIME coverage estimate");
    render_estimate(&result);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        region,
        skip_leads,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("ClearPath Life demo");
    let engine = EstimatorEngine::new(CostCatalog::standard());
    let estimate = engine.final_expense(
        ServiceType::Burial,
        &region,
        &CategorySelection::all_included(),
    )?;

    println!("\nFinal-expense estimate ({region})");
    render_estimate(&estimate);

    if skip_leads {
        return Ok(());
    }

    println!("\nLead intake demo");
    let repository = Arc::new(InMemoryLeadRepository::default());
    let notifications = Arc::new(InMemoryNotificationPublisher::default());
    let service = LeadIntakeService::new(repository.clone(), notifications.clone());

    let quote = submit_or_report(
        &service,
        LeadSubmission::Quote(QuoteRequest {
            first_name: "June".to_string(),
            last_name: "Park".to_string(),
            email: Some("june@example.com".to_string()),
            phone: None,
            region: Some(region),
            product: ProductLine::FinalExpense,
            coverage_amount: estimate.recommended_coverage,
            notes: Some("Prefilled from the coverage calculator".to_string()),
        }),
        today,
    );
    submit_or_report(
        &service,
        LeadSubmission::Contact(ContactMessage {
            name: "Omar Reyes".to_string(),
            email: "omar@example.com".to_string(),
            subject: "Beneficiary change".to_string(),
            body: "How do I update the beneficiary on my policy?".to_string(),
        }),
        today,
    );
    submit_or_report(
        &service,
        LeadSubmission::JobApplication(JobApplication {
            name: "Sam Okafor".to_string(),
            email: "sam@example.com".to_string(),
            phone: None,
            position: "Licensed agent".to_string(),
            years_experience: 4,
            licensed: true,
            resume_key: None,
        }),
        today,
    );

    if let Some(id) = quote {
        if let Ok(record) = service.transition(&id, LeadStatus::Contacted) {
            println!("- {} moved to {}", record.id.0, record.status.label());
        }
    }

    println!(
        "- {} staff notification(s) dispatched",
        notifications.events().len()
    );

    let records = match service.list() {
        Ok(records) => records,
        Err(error) => {
            println!("- failed to load leads: {error}");
            return Ok(());
        }
    };
    let summary = summarize(&records, today, DEMO_WINDOW_DAYS);
    let insights = summary.insights(&records, today);

    println!("\nDashboard snapshot ({DEMO_WINDOW_DAYS} day window)");
    for entry in &summary.kind_breakdown {
        println!(
            "- {}: {} total | {} open",
            entry.kind_label, entry.total, entry.open
        );
    }
    println!("Pipeline pressure: {}", insights.pressure.label());
    for observation in &insights.observations {
        println!("  - {observation}");
    }
    for action in &insights.recommended_actions {
        println!("  > {action}");
    }

    Ok(())
}

fn render_estimate(result: &EstimateResult) {
    for line in &result.breakdown {
        println!("- {}: ${}", line.label, line.amount);
    }
    println!(
        "Total: ${} ({})",
        result.total,
        format_currency(result.total)
    );
    let suggestion = recommend(result.total);
    println!(
        "Recommended coverage: {}",
        format_currency(suggestion.rounded_coverage)
    );
    println!("{}", suggestion.message);
}

fn submit_or_report<R, N>(
    service: &LeadIntakeService<R, N>,
    submission: LeadSubmission,
    today: NaiveDate,
) -> Option<clearpath_life::leads::LeadId>
where
    R: clearpath_life::leads::LeadRepository + 'static,
    N: clearpath_life::leads::NotificationPublisher + 'static,
{
    match service.submit(submission, today) {
        Ok(record) => {
            println!("- {} accepted: {}", record.id.0, record.summary());
            Some(record.id)
        }
        Err(error) => {
            println!("- submission rejected: {error}");
            None
        }
    }
}
