use clap::Parser;
use std::time::Duration;
use thompson_digital::core::form::{FormController, SubmitOutcome};
use thompson_digital::core::validate::Field;
use thompson_digital::http::client::HttpInquiryTransport;
use thompson_digital::utils::logger;
use thompson_digital::utils::validation::validate_range;

#[derive(Parser)]
#[command(name = "send-inquiry")]
#[command(about = "Submit a contact inquiry to a running agency API")]
struct Args {
    /// Base URL of the agency API
    #[arg(long, default_value = "http://localhost:4000")]
    endpoint: String,

    /// Your name
    #[arg(long)]
    name: String,

    /// Contact email address
    #[arg(long)]
    email: String,

    /// Company name
    #[arg(long)]
    company: Option<String>,

    /// Phone number
    #[arg(long)]
    phone: Option<String>,

    /// Service category slug (e.g. web-development)
    #[arg(long)]
    service: String,

    /// Inquiry message (10 to 1000 characters)
    #[arg(long)]
    message: String,

    /// Budget range slug (e.g. 10k-25k)
    #[arg(long)]
    budget: Option<String>,

    /// Project timeline slug (e.g. "1-3 months")
    #[arg(long)]
    timeline: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_seconds: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    validate_range("timeout_seconds", args.timeout_seconds, 1, 300)?;
    let transport = HttpInquiryTransport::with_timeout(
        &args.endpoint,
        Duration::from_secs(args.timeout_seconds),
    )?;

    let controller = FormController::new(transport, None);
    controller.set_field(Field::Name, &args.name).await;
    controller.set_field(Field::Email, &args.email).await;
    controller.set_field(Field::ServiceCategory, &args.service).await;
    controller.set_field(Field::Message, &args.message).await;
    if let Some(company) = &args.company {
        controller.set_field(Field::Company, company).await;
    }
    if let Some(phone) = &args.phone {
        controller.set_field(Field::Phone, phone).await;
    }
    if let Some(budget) = &args.budget {
        controller.set_field(Field::Budget, budget).await;
    }
    if let Some(timeline) = &args.timeline {
        controller.set_field(Field::Timeline, timeline).await;
    }

    tracing::info!("Submitting inquiry to {}", args.endpoint);

    match controller.submit().await {
        SubmitOutcome::Accepted(receipt) => {
            println!("✅ Inquiry submitted successfully!");
            println!("   Reference: {}", receipt.inquiry_id);
            println!("   Received at: {}", receipt.timestamp.to_rfc3339());
        }
        SubmitOutcome::Invalid(errors) => {
            eprintln!("❌ The inquiry is not valid:");
            for error in &errors {
                eprintln!("   {}", error);
            }
            std::process::exit(1);
        }
        SubmitOutcome::Failed(message) => {
            eprintln!("❌ Submission failed: {}", message);
            std::process::exit(2);
        }
        SubmitOutcome::Blocked => {
            eprintln!("❌ Another submission is already in flight");
            std::process::exit(2);
        }
    }

    Ok(())
}
