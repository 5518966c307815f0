use anyhow::{anyhow, bail, Context, Result};

use crate::view::controller::PropertyField;

pub const HELP: &str = "\
Comandos:
  list | reload                  recarregar a lista
  name <texto>                   nome do novo imóvel
  address <texto>                endereço do novo imóvel
  create [<nome> | <endereço>]   criar imóvel
  select <id> [<texto>]          focar o campo de novo cômodo do imóvel
  room [<texto>]                 adicionar cômodo ao imóvel selecionado
  delete <id>                    apagar imóvel
  delete-room <id>               apagar cômodo
  edit <id>                      editar imóvel
  set name|address|description <texto>
  save                           salvar imóvel em edição
  edit-room <id>                 editar cômodo
  room-name <texto>              nome do cômodo em edição
  save-room                      salvar cômodo em edição
  cancel                         descartar edições
  help
  quit | exit";

/// One user action typed at the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Reload,
    SetName(String),
    SetAddress(String),
    Create(Option<(String, String)>),
    Select { property_id: i64, text: Option<String> },
    AddRoom(Option<String>),
    DeleteProperty(i64),
    DeleteRoom(i64),
    EditProperty(i64),
    SetField(PropertyField, String),
    SaveProperty,
    EditRoom(i64),
    SetRoomName(String),
    SaveRoom,
    Cancel,
    Help,
    Quit,
}

fn parse_id(arg: &str) -> Result<i64> {
    let arg = arg.trim();
    if arg.is_empty() {
        bail!("missing id");
    }
    arg.parse()
        .with_context(|| format!("invalid id '{}'", arg))
}

fn optional_text(arg: &str) -> Option<String> {
    let arg = arg.trim();
    (!arg.is_empty()).then(|| arg.to_string())
}

impl Command {
    /// Parse a prompt line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word {
            "list" | "reload" => Command::Reload,
            "name" => Command::SetName(rest.to_string()),
            "address" => Command::SetAddress(rest.to_string()),
            "create" if rest.is_empty() => Command::Create(None),
            "create" => {
                let (name, address) = rest
                    .split_once('|')
                    .ok_or_else(|| anyhow!("usage: create <nome> | <endereço>"))?;
                Command::Create(Some((name.trim().to_string(), address.trim().to_string())))
            }
            "select" => {
                let (id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Command::Select {
                    property_id: parse_id(id)?,
                    text: optional_text(text),
                }
            }
            "room" => Command::AddRoom(optional_text(rest)),
            "delete" => Command::DeleteProperty(parse_id(rest)?),
            "delete-room" => Command::DeleteRoom(parse_id(rest)?),
            "edit" => Command::EditProperty(parse_id(rest)?),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = match field {
                    "name" => PropertyField::Name,
                    "address" => PropertyField::Address,
                    "description" => PropertyField::Description,
                    other => bail!("unknown field '{}'", other),
                };
                Command::SetField(field, value.trim().to_string())
            }
            "save" => Command::SaveProperty,
            "edit-room" => Command::EditRoom(parse_id(rest)?),
            "room-name" => Command::SetRoomName(rest.to_string()),
            "save-room" => Command::SaveRoom,
            "cancel" => Command::Cancel,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command '{}', try 'help'", other),
        };

        Ok(Some(command))
    }
}
