use arboard::Clipboard;
use color_eyre::Result;

/// System clipboard, opened on first use so headless sessions never touch it
#[derive(Default)]
pub struct ClipboardService {
    clipboard: Option<Clipboard>,
}

impl ClipboardService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match &mut self.clipboard {
            Some(clipboard) => clipboard,
            empty => empty.insert(Clipboard::new()?),
        };
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}
