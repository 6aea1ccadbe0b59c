use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use textarea::cli::{describe_keymap, CliArgs};
use textarea::{MemoryField, Textarea, TextareaConfig};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    textarea::tracing::init(args.log_directory().as_deref());

    let base = match &args.config {
        Some(path) => TextareaConfig::load(path)?,
        None => TextareaConfig::load_user()?,
    };
    let config = args.apply_overrides(base);

    if args.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    if args.list_keys {
        let settings = config.resolve().context("Invalid textarea configuration")?;
        print!("{}", describe_keymap(&settings.keymap));
        return Ok(());
    }

    let keystrokes = args.keystrokes()?;
    let text = read_input(&args)?;

    let mut area = Textarea::new(MemoryField::from_text(&text), &config)
        .context("Invalid textarea configuration")?;
    if let Some(selection) = args.select {
        area.set_selection(selection);
    }

    for keystroke in &keystrokes {
        if !area.handle_key(keystroke) {
            tracing::warn!("No binding for {}, skipped", keystroke);
        }
    }

    if args.history {
        let entries: Vec<_> = area.history().iter().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(area.history().current())?);
    } else {
        print!("{}", area.value());
    }

    Ok(())
}

fn read_input(args: &CliArgs) -> Result<String> {
    match args.file.as_deref() {
        Some(path) if !args.reads_stdin() => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
