/// Side requests returned by `update` and executed by the platform layer.
/// The core only guarantees the payloads are fully formed; both capabilities
/// are best-effort and no return value is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Invoke the platform share capability with a deep link and title.
    Share { title: String, url: String },
    /// Invoke the platform clipboard capability.
    CopyToClipboard { text: String },
    /// Bring the rendered card owning `slug` into view and highlight it.
    ScrollTo { slug: String },
}
