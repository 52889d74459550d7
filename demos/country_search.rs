//! Country Search Example
//!
//! Demonstrates the search autocomplete behavior with fuzzy filtering:
//! - Type to filter countries
//! - Fuzzy matching (e.g., "us" matches "United States")
//! - Arrow keys move through suggestions, Enter commits the focused one
//! - Enter with no suggestion focused submits the raw text
//! - Escape closes the menu, then clears the field

use std::fs::File;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute,
    style::{Attribute, SetAttribute},
    terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

use armature::attrs::names;
use armature::combo_box::ComboBoxState;
use armature::events::Event;
use armature::keys::{Key, convert_key_event};
use armature::search_autocomplete::{SearchAutocompleteConfig, search_autocomplete_behavior};

const COUNTRIES: &[(&str, &str)] = &[
    ("us", "United States"),
    ("uk", "United Kingdom"),
    ("de", "Germany"),
    ("fr", "France"),
    ("es", "Spain"),
    ("it", "Italy"),
    ("nl", "Netherlands"),
    ("be", "Belgium"),
    ("se", "Sweden"),
    ("no", "Norway"),
    ("dk", "Denmark"),
    ("fi", "Finland"),
    ("pl", "Poland"),
    ("pt", "Portugal"),
    ("at", "Austria"),
    ("ch", "Switzerland"),
    ("ie", "Ireland"),
    ("gr", "Greece"),
    ("cz", "Czech Republic"),
    ("hu", "Hungary"),
    ("jp", "Japan"),
    ("cn", "China"),
    ("kr", "South Korea"),
    ("au", "Australia"),
    ("nz", "New Zealand"),
    ("ca", "Canada"),
    ("mx", "Mexico"),
    ("br", "Brazil"),
    ("ar", "Argentina"),
    ("za", "South Africa"),
];

/// Restores the terminal on drop, including on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn draw(
    stdout: &mut io::Stdout,
    state: &ComboBoxState,
    value: &str,
    expanded: bool,
    message: &str,
) -> io::Result<()> {
    execute!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All)
    )?;

    execute!(stdout, SetAttribute(Attribute::Bold))?;
    write!(stdout, "Country Search Demo\r\n")?;
    execute!(stdout, SetAttribute(Attribute::Reset))?;
    execute!(stdout, SetAttribute(Attribute::Dim))?;
    write!(stdout, "Type to fuzzy-search countries\r\n\r\n")?;
    execute!(stdout, SetAttribute(Attribute::Reset))?;

    write!(stdout, "Country: {value}_\r\n")?;

    if expanded {
        let focused = state.selection_manager().focused_key();
        for item in state.filtered_items() {
            let marker = if focused.as_ref() == Some(&item.key) {
                ">"
            } else {
                " "
            };
            write!(stdout, "  {marker} {}\r\n", item.label)?;
        }
    }

    let selected = state
        .selection_manager()
        .selected_key()
        .and_then(|key| {
            state
                .label_for(&key)
                .map(|label| format!("{label} ({key})"))
        })
        .unwrap_or_else(|| "(none)".to_string());
    write!(stdout, "\r\nSelected: {selected}\r\n")?;
    write!(stdout, "{message}\r\n")?;

    execute!(stdout, SetAttribute(Attribute::Dim))?;
    write!(stdout, "\r\nEnter submits, Escape clears, ctrl+c quits\r\n")?;
    execute!(stdout, SetAttribute(Attribute::Reset))?;

    stdout.flush()
}

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("country_search.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let state = ComboBoxState::new().with_items(COUNTRIES);
    let message = Arc::new(Mutex::new("Type to search for a country...".to_string()));

    let submit_message = Arc::clone(&message);
    let clear_message = Arc::clone(&message);
    let config = SearchAutocompleteConfig::new()
        .label("Country")
        .placeholder("Search countries...")
        .on_submit(move |value, _| {
            *submit_message.lock().unwrap() = format!("Submitted: '{value}'");
        })
        .on_clear(move || {
            *clear_message.lock().unwrap() = "Cleared".to_string();
        });

    let _guard = TerminalGuard::new()?;
    let mut stdout = io::stdout();

    // The field starts focused
    let attrs = search_autocomplete_behavior(&config, &state);
    attrs.input.dispatch(names::ON_FOCUS, &Event::Focus);

    loop {
        let attrs = search_autocomplete_behavior(&config, &state);
        let value = attrs
            .input
            .str_value(names::VALUE)
            .unwrap_or_default()
            .to_string();
        let expanded = attrs.input.bool_value(names::ARIA_EXPANDED) == Some(true);

        draw(
            &mut stdout,
            &state,
            &value,
            expanded,
            &message.lock().unwrap(),
        )?;
        state.clear_dirty();

        let CrosstermEvent::Key(key_event) = event::read()? else {
            continue;
        };
        let Some(combo) = convert_key_event(key_event) else {
            continue;
        };

        if combo.modifiers.ctrl && combo.key == Key::Char('c') {
            break;
        }

        match combo.key {
            Key::Char(c) if combo.modifiers.is_empty() || combo.modifiers.shift => {
                let mut text = state.input_value();
                text.push(c);
                attrs.input.dispatch(names::ON_CHANGE, &Event::Change(text));
            }
            Key::Backspace => {
                let mut text = state.input_value();
                text.pop();
                attrs.input.dispatch(names::ON_CHANGE, &Event::Change(text));
            }
            _ => {
                attrs.input.dispatch(names::ON_KEY_DOWN, &Event::KeyDown(combo));
            }
        }
    }

    Ok(())
}
