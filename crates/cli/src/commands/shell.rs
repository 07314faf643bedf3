//! Interactive session.
//!
//! Customers browse with `show`, `search`, `season` and `link`. Typing `logo`
//! the configured number of times in a row toggles admin mode, after which
//! `edit` reveals the editing commands.

use std::io::{BufRead, Write};
use std::path::Path;

use catalogo_core::Season;
use catalogo_editor::{AdminSession, CatalogStore, EditorConfig, KeyValueStorage};
use tracing::error;

use super::edit::{ProductChanges, SettingsChanges};
use super::{CommandResult, catalog, edit};
use crate::confirm::PromptConfirm;

const HELP: &str = "\
Commands:
  show                               list the season on display
  search <text>                      list products matching <text>
  season <winter|summer>             switch season
  link <category> <product>          print the inquiry link for a product
  help                               show this help
  quit                               leave the session
";

const ADMIN_HELP: &str = "\
Admin commands:
  edit                               toggle edit mode
  export [dir]                       write catalogo_backup.json
Edit mode commands:
  add-category
  delete-category <category>
  category <category> <name|icon> <value>
  add-product <category>
  delete-product <category> <product>
  product <category> <product> <name|description|price|discount|image> <value>
  setting <title|subtitle|contact|cta-label|cta-color|logo> <value>
";

const EDIT_COMMANDS: &[&str] = &[
    "add-category",
    "delete-category",
    "category",
    "add-product",
    "delete-product",
    "product",
    "setting",
];

enum Flow {
    Continue,
    Quit,
}

/// Run an interactive session on the terminal.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn run<S: KeyValueStorage>(store: &mut CatalogStore<S>, config: &EditorConfig) -> CommandResult {
    let input = std::io::stdin().lock();
    let output = std::io::stdout().lock();
    Shell::new(store, config, input, output).run()
}

/// A read-eval-print loop over one catalog store.
pub struct Shell<'a, S, R, W> {
    store: &'a mut CatalogStore<S>,
    config: &'a EditorConfig,
    session: AdminSession,
    input: R,
    output: W,
}

impl<'a, S: KeyValueStorage, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(store: &'a mut CatalogStore<S>, config: &'a EditorConfig, input: R, output: W) -> Self {
        Self {
            store,
            config,
            session: AdminSession::new(config.admin_taps),
            input,
            output,
        }
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Failed commands are reported and the session goes on.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read or output cannot be written.
    pub fn run(&mut self) -> CommandResult {
        writeln!(
            self.output,
            "{} - type 'help' for commands",
            self.store.document().title
        )?;

        loop {
            write!(self.output, "{}", self.prompt())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.dispatch(line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    error!("Command failed: {e}");
                    writeln!(self.output, "Error: {e}")?;
                }
            }
        }
        Ok(())
    }

    const fn prompt(&self) -> &'static str {
        if self.session.can_edit() {
            "catalogo [edit]> "
        } else if self.session.is_admin_active() {
            "catalogo [admin]> "
        } else {
            "catalogo> "
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<Flow, Box<dyn std::error::Error>> {
        let (command, args) = split_word(line);

        if command == "logo" {
            if self.session.tap_logo() {
                let state = if self.session.is_admin_active() {
                    "on"
                } else {
                    "off"
                };
                writeln!(self.output, "Admin mode {state}")?;
            }
            return Ok(Flow::Continue);
        }
        self.session.reset_taps();

        let admin = self.session.is_admin_active();
        match command {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => {
                write!(self.output, "{HELP}")?;
                if admin {
                    write!(self.output, "{ADMIN_HELP}")?;
                }
            }
            "show" => catalog::show(self.store, None, &mut self.output)?,
            "search" => catalog::show(self.store, Some(args), &mut self.output)?,
            "season" => match args.parse::<Season>() {
                Ok(season) => catalog::season(self.store, season)?,
                Err(e) => writeln!(self.output, "{e}")?,
            },
            "link" => match two_words(args) {
                Some((category, product)) => catalog::link(
                    self.store,
                    self.config,
                    &category.into(),
                    &product.into(),
                    &mut self.output,
                )?,
                None => self.usage("link <category> <product>")?,
            },
            "edit" if admin => {
                let state = if self.session.toggle_edit_mode() {
                    "on"
                } else {
                    "off"
                };
                writeln!(self.output, "Edit mode {state}")?;
            }
            "export" if admin => {
                let dir = if args.is_empty() { "." } else { args };
                catalog::export(self.store, Path::new(dir), &mut self.output)?;
            }
            cmd if admin && EDIT_COMMANDS.contains(&cmd) => {
                if self.session.can_edit() {
                    self.edit(cmd, args)?;
                } else {
                    writeln!(self.output, "Turn on edit mode with 'edit' first")?;
                }
            }
            _ => writeln!(self.output, "Unknown command: {command}. Type 'help'.")?,
        }
        Ok(Flow::Continue)
    }

    fn edit(&mut self, command: &str, args: &str) -> CommandResult {
        match command {
            "add-category" => edit::add_category(self.store, &mut self.output),
            "delete-category" => match one_word(args) {
                Some(id) => edit::delete_category(
                    self.store,
                    &id.into(),
                    &mut PromptConfirm::new(&mut self.input, &mut self.output),
                ),
                None => self.usage("delete-category <category>"),
            },
            "category" => {
                let (id, rest) = split_word(args);
                let (field, value) = split_word(rest);
                let value = Some(value.to_owned());
                match field {
                    "name" => edit::set_category(self.store, &id.into(), value, None),
                    "icon" => edit::set_category(self.store, &id.into(), None, value),
                    _ => self.usage("category <category> <name|icon> <value>"),
                }
            }
            "add-product" => match one_word(args) {
                Some(id) => edit::add_product(self.store, &id.into(), &mut self.output),
                None => self.usage("add-product <category>"),
            },
            "delete-product" => match two_words(args) {
                Some((category, product)) => edit::delete_product(
                    self.store,
                    &category.into(),
                    &product.into(),
                    &mut PromptConfirm::new(&mut self.input, &mut self.output),
                ),
                None => self.usage("delete-product <category> <product>"),
            },
            "product" => {
                let (category, rest) = split_word(args);
                let (product, rest) = split_word(rest);
                let (field, value) = split_word(rest);
                match product_changes(field, value) {
                    Some(changes) if !product.is_empty() => {
                        edit::set_product(self.store, &category.into(), &product.into(), changes)
                    }
                    _ => self.usage(
                        "product <category> <product> <name|description|price|discount|image> <value>",
                    ),
                }
            }
            "setting" => {
                let (field, value) = split_word(args);
                match settings_changes(field, value) {
                    Some(changes) => edit::set_settings(self.store, changes),
                    None => self.usage(
                        "setting <title|subtitle|contact|cta-label|cta-color|logo> <value>",
                    ),
                }
            }
            _ => Ok(()),
        }
    }

    fn usage(&mut self, usage: &str) -> CommandResult {
        writeln!(self.output, "Usage: {usage}")?;
        Ok(())
    }
}

/// First word and the trimmed rest of the line.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    s.split_once(char::is_whitespace)
        .map_or((s, ""), |(word, rest)| (word, rest.trim()))
}

fn one_word(s: &str) -> Option<&str> {
    let mut words = s.split_whitespace();
    match (words.next(), words.next()) {
        (Some(word), None) => Some(word),
        _ => None,
    }
}

fn two_words(s: &str) -> Option<(&str, &str)> {
    let mut words = s.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(first), Some(second), None) => Some((first, second)),
        _ => None,
    }
}

fn product_changes(field: &str, value: &str) -> Option<ProductChanges> {
    let value = Some(value.to_owned());
    let mut changes = ProductChanges::default();
    match field {
        "name" => changes.name = value,
        "description" => changes.description = value,
        "price" => changes.price = value,
        "discount" => changes.discount = value,
        "image" => changes.image = value,
        _ => return None,
    }
    Some(changes)
}

fn settings_changes(field: &str, value: &str) -> Option<SettingsChanges> {
    let value = Some(value.to_owned());
    let mut changes = SettingsChanges::default();
    match field {
        "title" => changes.title = value,
        "subtitle" => changes.subtitle = value,
        "contact" => changes.contact = value,
        "cta-label" => changes.cta_label = value,
        "cta-color" => changes.cta_color = value,
        "logo" => changes.logo = value,
        _ => return None,
    }
    Some(changes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use catalogo_core::{CategoryId, ProductId};
    use catalogo_editor::MemoryStorage;
    use rust_decimal::Decimal;

    use super::*;

    const UNLOCK: &str = "logo\nlogo\nlogo\nlogo\nlogo\nedit\n";

    fn session(script: &str) -> (CatalogStore<MemoryStorage>, String) {
        session_with(script, &EditorConfig::default())
    }

    fn session_with(script: &str, config: &EditorConfig) -> (CatalogStore<MemoryStorage>, String) {
        let mut store = CatalogStore::open(MemoryStorage::new(), "catalog").unwrap();
        let mut output = Vec::new();
        Shell::new(&mut store, config, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        (store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_edit_commands_hidden_without_admin() {
        let (store, out) = session("add-category\nedit\n");
        assert_eq!(store.document().active().len(), 2);
        assert!(out.contains("Unknown command: add-category"));
        assert!(out.contains("Unknown command: edit"));
    }

    #[test]
    fn test_logo_taps_unlock_editing() {
        let (store, out) = session(&format!("{UNLOCK}add-category\nquit\n"));
        assert!(out.contains("Admin mode on"));
        assert!(out.contains("Edit mode on"));
        assert_eq!(store.document().active().len(), 3);
    }

    #[test]
    fn test_admin_without_edit_mode_cannot_edit() {
        let (store, out) = session("logo\nlogo\nlogo\nlogo\nlogo\nadd-category\n");
        assert!(out.contains("Turn on edit mode"));
        assert_eq!(store.document().active().len(), 2);
    }

    #[test]
    fn test_other_command_breaks_tap_streak() {
        let (_, out) = session("logo\nlogo\nlogo\nlogo\nshow\nlogo\n");
        assert!(!out.contains("Admin mode on"));
    }

    #[test]
    fn test_configured_tap_count() {
        let config = EditorConfig {
            admin_taps: 2,
            ..EditorConfig::default()
        };
        let (_, out) = session_with("logo\nlogo\nlogo\nlogo\n", &config);
        assert!(out.contains("Admin mode on"));
        assert!(out.contains("Admin mode off"));
    }

    #[test]
    fn test_delete_product_asks_for_confirmation() {
        let w1 = CategoryId::new("w1");

        let (store, out) = session(&format!("{UNLOCK}delete-product w1 p1\nn\n"));
        assert!(out.contains("¿Deseas eliminar este producto? [y/N]"));
        assert!(store.find_product(&w1, &ProductId::new("p1")).is_some());

        let (store, _) = session(&format!("{UNLOCK}delete-product w1 p1\ny\n"));
        assert!(store.find_product(&w1, &ProductId::new("p1")).is_none());
    }

    #[test]
    fn test_product_and_setting_edits() {
        let script = format!(
            "{UNLOCK}product w2 p3 price 99.5\nproduct w2 p3 name Cobija Polar XXL\nsetting title TIENDA NUEVA\n"
        );
        let (store, _) = session(&script);

        let product = store
            .find_product(&CategoryId::new("w2"), &ProductId::new("p3"))
            .unwrap();
        assert_eq!(product.base_price.amount(), Decimal::new(995, 1));
        assert_eq!(product.name, "Cobija Polar XXL");
        assert_eq!(store.document().title, "TIENDA NUEVA");
    }

    #[test]
    fn test_browsing_commands() {
        let (store, out) = session("search plumas\nseason summer\nshow\nlink s1 p4\nseason autumn\n");
        assert!(out.contains("Edredón Nórdico"));
        assert!(out.contains("SÁBANAS"));
        assert!(out.contains("https://wa.me/51999888777?text="));
        assert!(out.contains("autumn"));
        assert_eq!(store.document().season, Season::Summer);
    }

    #[test]
    fn test_usage_on_bad_arguments() {
        let (_, out) = session(&format!("{UNLOCK}product w1\nlink w1\n"));
        assert!(out.contains("Usage: product"));
        assert!(out.contains("Usage: link"));
    }

    #[test]
    fn test_failed_link_keeps_session_alive() {
        let (_, out) = session("link w1 nope\nshow\n");
        assert!(out.contains("Error: Product w1/nope not found"));
        assert!(out.contains("EDREDONES"));
    }
}
