use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, FormspreeClient, OrderFormController, SubmissionStatus, SubmitError,
};
use shared::domain::{
    CharmColor, ClaspColor, CommissionType, HighlightKind, HighlightSelection, TextField,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    /// Overrides the Formspree form id from order_form.toml / environment.
    #[arg(long, global = true)]
    form_id: Option<String>,
    /// Overrides the form endpoint base URL.
    #[arg(long, global = true)]
    endpoint: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validates an order and sends it to the form backend.
    Submit(OrderArgs),
    /// Lists the clasp, charm and highlight options the form accepts.
    Options,
}

#[derive(clap::Args, Debug)]
struct OrderArgs {
    #[arg(long, default_value = "")]
    nickname: String,
    #[arg(long, default_value = "")]
    username: String,
    #[arg(long, default_value = "")]
    character_name: String,
    #[arg(long, default_value = "")]
    reference_image: String,
    /// `fullset` or `png`.
    #[arg(long = "type", default_value = "")]
    commission_type: CommissionType,
    /// Six hex digits, with or without a leading `#`.
    #[arg(long, default_value = "")]
    outline_color: String,
    #[arg(long, default_value = "")]
    hand_pose: String,
    #[arg(long)]
    clasp: Option<ClaspColor>,
    #[arg(long)]
    star_charm_color: Option<CharmColor>,
    /// Repeatable `kind:side`, e.g. `--highlight cross:L`.
    #[arg(long = "highlight")]
    highlights: Vec<HighlightSelection>,
    /// Print the payload instead of sending it.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Options => print_options(),
        Command::Submit(order) => {
            let mut settings = load_settings();
            if let Some(form_id) = cli.form_id {
                settings.form_id = form_id;
            }
            if let Some(endpoint) = cli.endpoint {
                settings.endpoint = endpoint;
            }

            let mut form = fill_form(&order)?;
            if order.dry_run {
                println!("{}", dry_run(&mut form)?);
                return Ok(());
            }

            let client = FormspreeClient::from_settings(&settings)
                .context("form backend settings are invalid")?;
            tracing::info!(url = %client.submission_url(), "sending order");
            match form.validate_and_submit(&client).await.map_err(explain)? {
                SubmissionStatus::Succeeded => {
                    println!(
                        "Thank you for your order! We'll contact you soon via your X DM."
                    );
                }
                SubmissionStatus::Failed(errors) => {
                    bail!("order was not accepted: {errors}");
                }
                other => bail!("submission ended in unexpected state {other:?}"),
            }
        }
    }

    Ok(())
}

fn fill_form(order: &OrderArgs) -> Result<OrderFormController> {
    let mut form = OrderFormController::new();
    form.set_field(TextField::Nickname, order.nickname.as_str());
    form.set_field(TextField::Username, order.username.as_str());
    form.set_field(TextField::CharacterName, order.character_name.as_str());
    form.set_field(TextField::ReferenceImage, order.reference_image.as_str());
    form.set_field(TextField::HandPose, order.hand_pose.as_str());

    form.set_commission_type(order.commission_type);
    form.set_clasp(order.clasp);
    form.set_charm_color(order.star_charm_color);

    if !order.outline_color.is_empty() && !form.set_outline_color_from_text(&order.outline_color)
    {
        bail!("outline color {:?} is not a hex colour", order.outline_color);
    }

    for (i, selection) in order.highlights.iter().enumerate() {
        if order.highlights[..i].contains(selection) {
            bail!(
                "highlight {}:{} was given more than once",
                selection.kind.id(),
                selection.side.label()
            );
        }
        form.toggle_highlight(selection.kind, selection.side)?;
    }
    Ok(form)
}

/// Validates the draft and renders the payload that would be sent.
fn dry_run(form: &mut OrderFormController) -> Result<String> {
    let payload = form.begin_submission().map_err(explain)?;
    Ok(serde_json::to_string_pretty(&payload)?)
}

fn explain(err: SubmitError) -> anyhow::Error {
    match err {
        SubmitError::Invalid(report) => {
            for message in report.messages() {
                eprintln!("  - {message}");
            }
            anyhow::anyhow!("order is incomplete ({} problem(s))", report.issues().len())
        }
        other => other.into(),
    }
}

fn print_options() {
    println!("types: fullset, png");
    println!("clasp colors:");
    for clasp in ClaspColor::ALL {
        println!("  {clasp}");
    }
    println!("star charm colors:");
    for charm in CharmColor::ALL {
        println!("  {charm}");
    }
    println!("highlights (kind:L or kind:R):");
    for kind in HighlightKind::ALL {
        println!("  {}", kind.id());
    }
}
