//! Interactive prompt driving the view controller

use anyhow::{bail, Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::view::command::{Command, HELP};
use crate::view::controller::ViewController;
use crate::view::render::Page;

/// Whether the prompt keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run one command against the controller. Commands naming an id that is not
/// in the current list are rejected without touching the state.
pub async fn apply(controller: &mut ViewController, command: Command) -> Result<Flow> {
    debug!("Applying {:?}", command);

    match command {
        Command::Reload => controller.load().await,
        Command::SetName(name) => controller.set_new_property_name(name),
        Command::SetAddress(address) => controller.set_new_property_address(address),
        Command::Create(fields) => {
            if let Some((name, address)) = fields {
                controller.set_new_property_name(name);
                controller.set_new_property_address(address);
            }
            controller.create_property().await;
        }
        Command::Select { property_id, text } => {
            let selected = match text {
                Some(text) => controller.type_room_name(property_id, text),
                None => controller.select_property(property_id),
            };
            if !selected {
                bail!("property {} is not listed", property_id);
            }
        }
        Command::AddRoom(text) => {
            if let (Some(text), Some(id)) = (text, controller.selected_property()) {
                if !controller.type_room_name(id, text) {
                    bail!("property {} is not listed", id);
                }
            }
            controller.add_room().await;
        }
        Command::DeleteProperty(id) => controller.delete_property(id).await,
        Command::DeleteRoom(id) => controller.delete_room(id).await,
        Command::EditProperty(id) => {
            if !controller.begin_edit_property(id) {
                bail!("property {} is not listed", id);
            }
        }
        Command::SetField(field, value) => controller.edit_property_field(field, value),
        Command::SaveProperty => controller.save_property().await,
        Command::EditRoom(id) => {
            if !controller.begin_edit_room(id) {
                bail!("room {} is not listed", id);
            }
        }
        Command::SetRoomName(name) => controller.edit_room_name(name),
        Command::SaveRoom => controller.save_room().await,
        Command::Cancel => {
            controller.cancel_property_edit();
            controller.cancel_room_edit();
        }
        Command::Help => {}
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Read commands line by line until `quit` or end of input, re-rendering
/// the page after each one.
pub async fn run<R, W>(controller: &mut ViewController, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    write_page(&mut output, controller).await?;

    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await.context("Failed to read command")? else {
            debug!("End of input");
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                output.write_all(format!("erro: {:#}\n", e).as_bytes()).await?;
                continue;
            }
        };

        if command == Command::Help {
            output.write_all(HELP.as_bytes()).await?;
            output.write_all(b"\n").await?;
            continue;
        }

        match apply(controller, command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                output.write_all(format!("erro: {:#}\n", e).as_bytes()).await?;
                continue;
            }
        }
        write_page(&mut output, controller).await?;
    }

    info!("Leaving");
    Ok(())
}

async fn write_page<W: AsyncWrite + Unpin>(output: &mut W, controller: &ViewController) -> Result<()> {
    let page = Page(controller).to_string();
    output
        .write_all(page.as_bytes())
        .await
        .context("Failed to write page")?;
    output.flush().await?;
    Ok(())
}
