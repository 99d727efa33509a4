use serde::{Deserialize, Serialize};

use super::*;
use crate::time::current_year;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Footer hyperlink.
pub struct FooterLink {
    /// Visible text.
    pub label: String,
    /// Target URL.
    pub href: String,
}

impl FooterLink {
    /// Creates a link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Titled column of footer links.
pub struct FooterLinkGroup {
    /// Column heading.
    pub title: String,
    /// Links in display order.
    pub links: Vec<FooterLink>,
}

/// `"© 2024 Holder. All rights reserved."`
pub fn copyright_line(holder: &str, year: i32) -> String {
    let holder = holder.trim();
    if holder.is_empty() {
        format!("© {year}")
    } else {
        format!("© {year} {holder}. All rights reserved.")
    }
}

#[component]
/// Page footer with link columns, emergency contact, copyright, and build version.
pub fn Footer(
    #[prop(optional)] groups: Vec<FooterLinkGroup>,
    #[prop(into)] organization: String,
    #[prop(optional, into)] version: Option<String>,
    #[prop(optional, into)] emergency_contact: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let columns = groups
        .into_iter()
        .filter(|group| !group.links.is_empty())
        .map(|group| {
            let links = group
                .links
                .into_iter()
                .map(|link| {
                    let external = link.is_external();
                    view! {
                        <li>
                            <a
                                class="inline-flex items-center gap-1 text-sm hover:underline"
                                href=link.href.clone()
                                target=external.then_some("_blank")
                                rel=external.then_some("noopener noreferrer")
                            >
                                {link.label.clone()}
                                {external.then(|| view! { <Icon icon=IconName::ExternalLink size=IconSize::Xs /> })}
                            </a>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <nav aria-label=group.title.clone() class="flex flex-col gap-2">
                    <Text role=TextRole::Label>{group.title}</Text>
                    <ul class="flex flex-col gap-1">{links}</ul>
                </nav>
            }
        })
        .collect_view();

    view! {
        <footer
            class=classes![
                "care-footer border-t border-[var(--care-color-border)] bg-[var(--care-color-surface)] px-6 py-8",
                layout_class
            ]
            data-care-primitive="true"
            data-care-kind="footer"
        >
            <div class="grid grid-cols-2 gap-6 md:grid-cols-4">{columns}</div>
            {emergency_contact.map(|contact| view! {
                <div class="mt-6" data-care-slot="emergency">
                    <Alert tone=Tone::Danger title="In an emergency">
                        {contact.clone()}
                    </Alert>
                </div>
            })}
            <div class="mt-6 flex flex-wrap items-center justify-between gap-2">
                <Text role=TextRole::Caption tone=Tone::Muted>{copyright_line(&organization, current_year())}</Text>
                {version.map(|version| view! {
                    <Text role=TextRole::Code tone=Tone::Muted>{format!("v{version}")}</Text>
                })}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn copyright_names_holder_when_present() {
        assert_eq!(copyright_line("Mercy Health", 2024), "© 2024 Mercy Health. All rights reserved.");
        assert_eq!(copyright_line("  ", 2025), "© 2025");
    }

    #[test]
    fn absolute_links_open_externally() {
        assert!(FooterLink::new("Portal", "https://example.org").is_external());
        assert!(!FooterLink::new("Privacy", "/privacy").is_external());
    }
}
