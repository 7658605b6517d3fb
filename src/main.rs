use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use pagseguro_checkout::application::checkout::PaymentMethod;
use pagseguro_checkout::domain::ports::PaymentGatewayBox;
use pagseguro_checkout::infrastructure::connection::PagSeguroConnectionData;
use pagseguro_checkout::infrastructure::in_memory::{
    InMemoryCheckoutSession, OfflineGateway, StaticCountryDirectory,
};
use pagseguro_checkout::interfaces::json::config_reader::ConfigReader;
use pagseguro_checkout::interfaces::json::order_reader::OrderReader;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the payment request built for an order
    Preview {
        /// Order snapshot JSON file
        #[arg(long)]
        order: PathBuf,

        /// Store configuration JSON file
        #[arg(long)]
        config: PathBuf,

        /// Print the URL-encoded form body instead of JSON
        #[arg(long)]
        form: bool,
    },
    /// Register the payment request with PagSeguro and print the outcome
    Register {
        /// Order snapshot JSON file
        #[arg(long)]
        order: PathBuf,

        /// Store configuration JSON file
        #[arg(long)]
        config: PathBuf,

        /// Override the gateway base URL (e.g. a local mock)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Print the payment page URL for a checkout code
    CheckoutUrl {
        /// Checkout code returned by the gateway
        code: String,

        /// Store configuration JSON file
        #[arg(long)]
        config: PathBuf,

        /// Name of the calling service, recorded in the logs
        #[arg(long, default_value = "checkout")]
        service: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Preview {
            order,
            config,
            form,
        } => {
            let method = payment_method(
                &config,
                Some(&order),
                Box::new(OfflineGateway),
                PagSeguroConnectionData::new(),
            )?;
            preview(&method, form, &mut out).await?;
        }
        Command::Register {
            order,
            config,
            base_url,
        } => {
            #[cfg(feature = "gateway-http")]
            {
                use pagseguro_checkout::infrastructure::http_gateway::HttpPaymentGateway;

                let connection = base_url
                    .as_deref()
                    .map(PagSeguroConnectionData::with_base_url)
                    .unwrap_or_default();
                let gateway = Box::new(HttpPaymentGateway::new(connection.clone()));
                let method = payment_method(&config, Some(&order), gateway, connection)?;
                let outcome = method.create_payment_request().await.into_diagnostic()?;
                let json = serde_json::to_string_pretty(&outcome).into_diagnostic()?;
                writeln!(out, "{json}").into_diagnostic()?;
            }
            #[cfg(not(feature = "gateway-http"))]
            {
                if base_url.is_some() {
                    tracing::warn!("--base-url is ignored without the 'gateway-http' feature");
                }
                eprintln!(
                    "WARNING: Registration requested, but 'gateway-http' feature is not enabled. Falling back to preview."
                );
                let method = payment_method(
                    &config,
                    Some(&order),
                    Box::new(OfflineGateway),
                    PagSeguroConnectionData::new(),
                )?;
                preview(&method, false, &mut out).await?;
            }
        }
        Command::CheckoutUrl {
            code,
            config,
            service,
        } => {
            let method = payment_method(
                &config,
                None,
                Box::new(OfflineGateway),
                PagSeguroConnectionData::new(),
            )?;
            let url = method.checkout_url(&code, &service).into_diagnostic()?;
            writeln!(out, "{url}").into_diagnostic()?;
        }
    }

    Ok(())
}

fn payment_method(
    config: &Path,
    order: Option<&Path>,
    gateway: PaymentGatewayBox,
    connection: PagSeguroConnectionData,
) -> Result<PaymentMethod> {
    let config = ConfigReader::new(File::open(config).into_diagnostic()?)
        .read_config()
        .into_diagnostic()?;

    let session = match order {
        Some(path) => {
            let order = OrderReader::new(File::open(path).into_diagnostic()?)
                .read_order()
                .into_diagnostic()?;
            InMemoryCheckoutSession::with_order(order)
        }
        None => InMemoryCheckoutSession::new(),
    };

    Ok(PaymentMethod::new(
        Box::new(session),
        Box::new(config),
        Box::new(StaticCountryDirectory::new()),
        gateway,
        Box::new(connection),
    ))
}

async fn preview(method: &PaymentMethod, form: bool, out: &mut impl Write) -> Result<()> {
    let request = method.build_payment_request().await.into_diagnostic()?;
    let rendered = if form {
        let charset = method.charset().into_diagnostic()?;
        request.to_form_body(charset).into_diagnostic()?
    } else {
        serde_json::to_string_pretty(&request).into_diagnostic()?
    };
    writeln!(out, "{rendered}").into_diagnostic()?;
    Ok(())
}
