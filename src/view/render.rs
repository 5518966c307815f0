use std::fmt;

use chrono::{DateTime, Local, Utc};

use crate::models::Property;
use crate::view::controller::ViewController;

/// Text rendering of the whole page for the current controller state
pub struct Page<'a>(pub &'a ViewController);

fn purchase_date(acquired_at: Option<&DateTime<Utc>>) -> String {
    acquired_at
        .map(|d| d.with_timezone(&Local).format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

impl Page<'_> {
    fn property(&self, f: &mut fmt::Formatter<'_>, property: &Property) -> fmt::Result {
        let view = self.0;

        match view.property_edit().filter(|e| e.id == property.id) {
            Some(edit) => {
                writeln!(f, "[{}] (editando)", property.id)?;
                writeln!(f, "    nome: {}", edit.name)?;
                writeln!(f, "    endereço: {}", edit.address)?;
                writeln!(f, "    descrição: {}", edit.description)?;
            }
            None => {
                writeln!(f, "[{}] {}", property.id, property.name)?;
                writeln!(f, "    {}", property.address)?;
                writeln!(f, "    _{}_", property.description.as_deref().unwrap_or(""))?;
                writeln!(
                    f,
                    "    Comprado em: {}",
                    purchase_date(property.acquired_at.as_ref())
                )?;
            }
        }

        writeln!(f, "    Cômodos:")?;
        for room in &property.rooms {
            match view.room_edit().filter(|e| e.id == room.id) {
                Some(edit) => writeln!(f, "      ({}) {} (editando)", room.id, edit.name)?,
                None => writeln!(f, "      ({}) {}", room.id, room.name)?,
            }
        }

        let marker = if view.selected_property() == Some(property.id) {
            ">"
        } else {
            " "
        };
        writeln!(
            f,
            "   {}Novo cômodo: {}",
            marker,
            view.new_room_value(property.id)
        )
    }
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "Gerenciamento de Imóveis")?;
        writeln!(f, "========================")?;
        writeln!(
            f,
            "Nome do imóvel: {} | Endereço: {}",
            view.new_property_name(),
            view.new_property_address()
        )?;
        writeln!(f)?;

        if view.properties().is_empty() {
            writeln!(f, "(nenhum imóvel)")?;
        }
        for property in view.properties() {
            self.property(f, property)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
