//! One-shot commands: each connects, runs a single operation and prints the result.

use super::{Overrides, connect, render};
use anyhow::Result;

pub async fn send(overrides: &Overrides, text: &str) -> Result<()> {
    let config = overrides.load_config()?;
    let (mut chat, mut events) = connect(&config);

    chat.ensure_session().await;
    chat.send_message(text).await;
    render::drain_events(&mut events);

    if let Some(reply) = chat.messages().last() {
        render::print_message(&chat, reply);
    }
    Ok(())
}

pub async fn history(overrides: &Overrides) -> Result<()> {
    let config = overrides.load_config()?;
    let (mut chat, mut events) = connect(&config);

    chat.fetch_messages().await;
    render::drain_events(&mut events);

    render::print_current_session(&chat);
    render::print_messages(&chat, chat.messages());
    Ok(())
}

pub async fn sessions(overrides: &Overrides) -> Result<()> {
    let config = overrides.load_config()?;
    let (mut chat, mut events) = connect(&config);

    chat.fetch_sessions().await;
    render::drain_events(&mut events);

    render::print_sessions(&chat);
    Ok(())
}

pub async fn clear(overrides: &Overrides) -> Result<()> {
    let config = overrides.load_config()?;
    let (mut chat, mut events) = connect(&config);

    chat.ensure_session().await;
    chat.clear_session().await;
    render::drain_events(&mut events);

    render::print_current_session(&chat);
    render::print_messages(&chat, chat.messages());
    Ok(())
}

pub async fn new(overrides: &Overrides) -> Result<()> {
    let config = overrides.load_config()?;
    let (mut chat, mut events) = connect(&config);

    chat.ensure_session().await;
    chat.new_session().await;
    render::drain_events(&mut events);

    render::print_current_session(&chat);
    render::print_messages(&chat, chat.messages());
    Ok(())
}
