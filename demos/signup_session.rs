//! Signup Session
//!
//! Walks one visitor through the landing page: browsing the carousel, a
//! rejected submit, then a successful one.
//!
//! Key concepts:
//! - Events in, view models out
//! - Virtual time driving the submission timers
//! - A failed outcome superseded by a later success
//!
//! Run with: RUST_LOG=debug cargo run --example signup_session

use bodyup_landing::config::LandingConfig;
use bodyup_landing::page::{LandingPage, PageEvent};
use bodyup_landing::submission::Lead;
use bodyup_landing::telemetry::TracingTelemetry;
use std::error::Error;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== BodyUp Signup Session ===\n");

    let mut page: LandingPage<Vec<Lead>> =
        LandingPage::load(LandingConfig::default(), &mut TracingTelemetry, Vec::new())?;

    for event in [
        PageEvent::TouchStart { x: 320.0 },
        PageEvent::TouchMove { x: 180.0 },
        PageEvent::TouchEnd,
    ] {
        page.handle(event)?;
    }
    let slide = page.carousel_view().slide;
    println!("Swiped to: {}", slide.title);

    page.handle(PageEvent::OpenPopup)?;
    page.handle(PageEvent::WhatsappInput("1198765432".into()))?;
    page.handle(PageEvent::EmailInput("visitante@gmail.com".into()))?;
    println!("Submit: {:?}", page.handle(PageEvent::Submit)?);
    if let Some(view) = page.form_view() {
        println!("  phase: {:?}, phone error: {:?}", view.phase, view.phone_error);
    }

    page.advance(Duration::from_secs(2));
    page.handle(PageEvent::WhatsappInput("(11) 98765-4321".into()))?;
    println!("Submit: {:?}", page.handle(PageEvent::Submit)?);

    page.advance(Duration::from_millis(1_500));
    if let Some(view) = page.form_view() {
        println!("  phase: {:?}, message: {:?}", view.phase, view.success_message);
    }
    println!("Leads captured: {}", page.leads().len());

    page.advance(Duration::from_secs(5));
    if let Some(view) = page.form_view() {
        println!("  phase after timeout: {:?}", view.phase);
    }

    println!("\n=== Session Complete ===");
    Ok(())
}
