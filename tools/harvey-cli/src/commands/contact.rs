//! Contact form submission.

use anyhow::{bail, Context as _, Result};
use chrono::Utc;
use dialoguer::Input;

use harvey_commerce::contact::{ContactField, ContactForm, LoggingContactSink};
use harvey_commerce::content::{contact_cards, BUSINESS_HOURS};

use super::ContactArgs;
use crate::context::Context;

/// Run the contact command.
pub async fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let interactive = !args.no_input && ctx.output.is_interactive();

    if interactive {
        print_contact_info(ctx);
        ctx.output.header("Send us a Message");
    }

    let mut form = ContactForm::new();
    for (field, value) in [
        (ContactField::Name, args.name),
        (ContactField::Email, args.email),
        (ContactField::Subject, args.subject),
        (ContactField::Message, args.message),
    ] {
        match value {
            Some(value) => form.set(field, value),
            None if interactive => form.set(field, prompt(field)?),
            None => bail!("--{} is required without a terminal", field.as_str()),
        }
    }

    let sink = LoggingContactSink::new(ctx.logger("contact-form"));
    let spinner = ctx.output.spinner("Sending message...");
    let result = form.submit(&sink);
    spinner.finish_and_clear();

    let submission = result.context("Message was not sent")?;
    let sent_at = Utc::now();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "submission": submission,
            "sent_at": sent_at.to_rfc3339(),
        }));
        return Ok(());
    }

    ctx.output.success("Thank you! Your message has been received.");
    ctx.output.kv("From", &format!("{} <{}>", submission.name, submission.email));
    ctx.output.kv("Subject", &submission.subject);
    ctx.output
        .kv("Sent", &sent_at.format("%Y-%m-%d %H:%M:%S UTC").to_string());

    Ok(())
}

fn prompt(field: ContactField) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(field.label())
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("This field is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value)
}

fn print_contact_info(ctx: &Context) {
    ctx.output.header("Get in Touch");
    for card in contact_cards(&ctx.config.contact) {
        ctx.output.kv(card.title, &card.details);
    }

    ctx.output.header("Business Hours");
    for hours in BUSINESS_HOURS {
        ctx.output.kv(hours.days, hours.hours);
    }
}
