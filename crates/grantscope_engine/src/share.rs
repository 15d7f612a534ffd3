use url::form_urlencoded;

/// Best-effort platform share capability. Callers guarantee the URL is
/// absolute and the title human-readable; no return value is consumed.
pub trait SharePort: Send + Sync {
    fn share(&self, title: &str, url: &str);
}

/// Best-effort clipboard capability.
pub trait ClipboardPort: Send + Sync {
    fn copy(&self, text: &str);
}

/// Prepared fallback share targets for platforms without a native share
/// sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub facebook: String,
    pub x: String,
    pub whatsapp: String,
    pub mail: String,
}

const SHARE_TAGLINE: &str = "Free, plain-English farm & ranch grants guide";
const MAIL_SUBJECT: &str = "Ranch & Farm Grants – Free Guide";

/// Builds the fallback share targets for one deep link.
pub fn build_share_links(title: &str, url: &str) -> ShareLinks {
    let text = encode(&format!("{title} – {SHARE_TAGLINE}"));
    let link = encode(url);
    ShareLinks {
        facebook: format!("https://www.facebook.com/sharer/sharer.php?u={link}"),
        x: format!("https://twitter.com/intent/tweet?text={text}&url={link}"),
        whatsapp: format!("https://api.whatsapp.com/send?text={text}%20{link}"),
        mail: format!(
            "mailto:?subject={subject}&body={text}%0A%0A{link}",
            subject = encode(MAIL_SUBJECT)
        ),
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
