use grantscope_core::{
    CardView, GuideViewModel, InfoAction, LoadStatus, ELIGIBILITY_NOTE, SEQUENCING_NOTE,
};

/// Projects the view model into terminal lines. Each call replaces the
/// whole previous output; there is no incremental update.
pub fn render(view: &GuideViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    match &view.load {
        LoadStatus::Loading => {
            lines.push("Loading programs…".to_string());
            return lines;
        }
        LoadStatus::Failed(message) => {
            // Distinct from an empty filter result.
            lines.push(format!("Could not load programs: {message}"));
            return lines;
        }
        LoadStatus::Ready => {}
    }

    lines.push(view.count_summary.clone());
    if !view.producer_options.is_empty() {
        lines.push(format!("Producers:  {}", view.producer_options.join(", ")));
    }
    if !view.category_options.is_empty() {
        lines.push(format!("Categories: {}", view.category_options.join(", ")));
    }

    for card in &view.cards {
        lines.push(String::new());
        render_card(card, &mut lines);
    }
    lines
}

fn render_card(card: &CardView, lines: &mut Vec<String>) {
    lines.push(format!("## {} [{}]", card.title, card.slug));
    lines.push(card.meta_line.clone());
    if !card.category_chips.is_empty() {
        lines.push(chips(&card.category_chips));
    }
    if !card.producer_chips.is_empty() {
        lines.push(chips(&card.producer_chips));
    }

    let mut badges = Vec::new();
    if let Some(chip) = &card.window_chip {
        badges.push(chip.clone());
    }
    if card.apply_before_badge {
        badges.push("apply before work".to_string());
    }
    if !badges.is_empty() {
        lines.push(chips(&badges));
    }

    if !card.summary.is_empty() {
        lines.push(card.summary.clone());
    }
    lines.push(ELIGIBILITY_NOTE.to_string());
    lines.push(SEQUENCING_NOTE.to_string());
    if let Some(timeline) = &card.decision_timeline {
        lines.push(format!("Decision timeline: {timeline}"));
    }
    lines.push(format!(
        "Estimated total timeframe: {}",
        card.estimated_timeframe
    ));

    lines.push(card.payout_line.clone());
    lines.push(card.max_award_line.clone());
    if let Some(docs) = &card.required_docs {
        lines.push(format!("Required docs: {docs}"));
    }
    if !card.disqualifiers.is_empty() {
        lines.push("Common disqualifiers:".to_string());
        for item in &card.disqualifiers {
            lines.push(format!("  - {item}"));
        }
    }
    if !card.tips.is_empty() {
        lines.push("Tips:".to_string());
        for item in &card.tips {
            lines.push(format!("  - {item}"));
        }
    }
    lines.push(card.last_verified_line.clone());

    match &card.info_action {
        InfoAction::Official(link) => lines.push(format!("Official info: {link}")),
        InfoAction::Search(link) => lines.push(format!("Search: {link}")),
    }
    lines.push(format!("Find local office: {}", card.locator_link));
    if let Some(link) = &card.apply_link {
        lines.push(format!("Apply: {link}"));
    }
    lines.push(format!("Share/copy link: {}", card.share_url));
}

fn chips(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("[{tag}]"))
        .collect::<Vec<_>>()
        .join(" ")
}
