use grantscope_core::Effect;
use grantscope_engine::{build_share_links, ClipboardPort, SharePort};
use guide_logging::guide_info;

/// Executes core effects through the platform capabilities. The terminal
/// build has no native share sheet or clipboard, so both ports print
/// actionable output instead.
pub struct EffectRunner {
    share: Box<dyn SharePort>,
    clipboard: Box<dyn ClipboardPort>,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self {
            share: Box::new(TerminalShare),
            clipboard: Box::new(TerminalClipboard),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Share { title, url } => {
                    guide_info!("Share requested: {}", url);
                    self.share.share(&title, &url);
                }
                Effect::CopyToClipboard { text } => {
                    guide_info!("Copy requested: {}", text);
                    self.clipboard.copy(&text);
                }
                Effect::ScrollTo { slug } => {
                    println!("(jump to card '{slug}')");
                }
            }
        }
    }
}

struct TerminalShare;

impl SharePort for TerminalShare {
    fn share(&self, title: &str, url: &str) {
        let links = build_share_links(title, url);
        println!("Share \"{title}\"");
        println!("  Link:     {url}");
        println!("  Facebook: {}", links.facebook);
        println!("  X:        {}", links.x);
        println!("  WhatsApp: {}", links.whatsapp);
        println!("  Email:    {}", links.mail);
    }
}

struct TerminalClipboard;

impl ClipboardPort for TerminalClipboard {
    fn copy(&self, text: &str) {
        println!("Copy: {text}");
    }
}
