//! Badge and fallback-message side effects.
//!
//! Both operations treat a missing section, badge or demo container as a
//! normal outcome: they report it through their return value and leave the
//! document untouched.

use showcase_dom::{Document, ElementBuilder, ElementKey};
use tracing::debug;

use crate::config::DetectorConfig;
use crate::error::DetectResult;

/// Outcome of [`update_support_badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeUpdate {
    /// The badge now shows the not-supported state.
    Marked(ElementKey),
    /// The feature is supported; the authored badge was not touched.
    LeftAsAuthored,
    /// No section has the requested id.
    MissingSection,
    /// The section has no badge.
    MissingBadge,
}

/// Outcome of [`show_fallback_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackInsert {
    /// A new message was inserted.
    Inserted(ElementKey),
    /// The container already holds a message.
    AlreadyPresent(ElementKey),
    /// No section has the requested id.
    MissingSection,
    /// The section has no demo container.
    MissingContainer,
}

/// Reflects a detection result on the section's support badge.
///
/// Supported features keep their authored badge. Unsupported ones lose every
/// support-level class, gain the not-supported class and get the fixed label.
pub fn update_support_badge(
    document: &mut Document,
    config: &DetectorConfig,
    section_id: &str,
    supported: bool,
) -> DetectResult<BadgeUpdate> {
    if supported {
        return Ok(BadgeUpdate::LeftAsAuthored);
    }

    let Some(section) = document.element_by_id(section_id) else {
        debug!(section = section_id, "no section for badge update");
        return Ok(BadgeUpdate::MissingSection);
    };
    let Some(badge) = document.find_descendant_by_class(section, &config.badge_class) else {
        debug!(section = section_id, "section has no support badge");
        return Ok(BadgeUpdate::MissingBadge);
    };

    for class in &config.support_level_classes {
        document.remove_class(badge, class)?;
    }
    document.add_class(badge, &config.not_supported_class)?;
    document.set_text(badge, &config.not_supported_label)?;
    Ok(BadgeUpdate::Marked(badge))
}

/// Inserts the fallback message as the first child of the section's demo
/// container, unless one is already there.
pub fn show_fallback_message(
    document: &mut Document,
    config: &DetectorConfig,
    section_id: &str,
) -> DetectResult<FallbackInsert> {
    let Some(section) = document.element_by_id(section_id) else {
        debug!(section = section_id, "no section for fallback message");
        return Ok(FallbackInsert::MissingSection);
    };
    let Some(container) = document.find_descendant_by_class(section, &config.demo_container_class)
    else {
        debug!(section = section_id, "section has no demo container");
        return Ok(FallbackInsert::MissingContainer);
    };

    if let Some(existing) = document.find_descendant_by_class(container, &config.fallback_class) {
        return Ok(FallbackInsert::AlreadyPresent(existing));
    }

    let message = ElementBuilder::new("div")
        .class(config.fallback_class.as_str())
        .attr("role", "note")
        .child(ElementBuilder::new("strong").text(config.fallback_title.as_str()))
        .child(ElementBuilder::new("p").text(config.fallback_body.as_str()));
    let key = document.insert_first_child(container, message)?;
    Ok(FallbackInsert::Inserted(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document_with_section(badge_classes: &[&str], with_container: bool) -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        let mut badge = ElementBuilder::new("span").class("support-badge");
        for class in badge_classes {
            badge = badge.class(*class);
        }
        let mut section = ElementBuilder::new("section")
            .id("carousel")
            .class("feature-section")
            .child(badge.text("Good Support"));
        if with_container {
            section = section.child(
                ElementBuilder::new("div")
                    .class("demo-container")
                    .child(ElementBuilder::new("div").class("carousel-track")),
            );
        }
        doc.append(root, section).unwrap();
        doc
    }

    #[test]
    fn test_unsupported_badge_is_replaced() {
        let mut doc = document_with_section(&["good-support"], true);
        let config = DetectorConfig::default();

        let outcome = update_support_badge(&mut doc, &config, "carousel", false).unwrap();
        let BadgeUpdate::Marked(badge) = outcome else {
            panic!("expected badge to be marked, got {outcome:?}");
        };

        let badge = doc.get(badge).unwrap();
        assert_eq!(badge.classes(), ["support-badge", "not-supported"]);
        assert_eq!(badge.text(), "Not Supported");
    }

    #[test]
    fn test_supported_badge_is_left_as_authored() {
        let mut doc = document_with_section(&["emerging"], true);
        let before = doc.revision();

        let outcome =
            update_support_badge(&mut doc, &DetectorConfig::default(), "carousel", true).unwrap();

        assert_eq!(outcome, BadgeUpdate::LeftAsAuthored);
        assert_eq!(doc.revision(), before);
        let badge = doc.elements_by_class("support-badge")[0];
        assert!(doc.has_class(badge, "emerging"));
        assert!(!doc.has_class(badge, "supported"));
    }

    #[test]
    fn test_missing_targets_are_reported() {
        let mut doc = document_with_section(&[], false);
        let config = DetectorConfig::default();

        assert_eq!(
            update_support_badge(&mut doc, &config, "nowhere", false).unwrap(),
            BadgeUpdate::MissingSection
        );
        assert_eq!(
            show_fallback_message(&mut doc, &config, "nowhere").unwrap(),
            FallbackInsert::MissingSection
        );
        assert_eq!(
            show_fallback_message(&mut doc, &config, "carousel").unwrap(),
            FallbackInsert::MissingContainer
        );

        let mut bare = Document::new();
        let root = bare.root();
        bare.append(root, ElementBuilder::new("section").id("carousel"))
            .unwrap();
        assert_eq!(
            update_support_badge(&mut bare, &config, "carousel", false).unwrap(),
            BadgeUpdate::MissingBadge
        );
    }

    #[test]
    fn test_fallback_is_first_child_and_idempotent() {
        let mut doc = document_with_section(&["good-support"], true);
        let config = DetectorConfig::default();

        let FallbackInsert::Inserted(message) =
            show_fallback_message(&mut doc, &config, "carousel").unwrap()
        else {
            panic!("expected insertion");
        };
        let container = doc.elements_by_class("demo-container")[0];
        assert_eq!(doc.get(container).unwrap().children()[0], message);
        assert!(doc.text_content(message).contains("not support"));

        assert_eq!(
            show_fallback_message(&mut doc, &config, "carousel").unwrap(),
            FallbackInsert::AlreadyPresent(message)
        );
        assert_eq!(doc.elements_by_class("fallback-message").len(), 1);
    }
}
