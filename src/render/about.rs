use crate::dom::Document;
use crate::domain::PageData;
use crate::domain::content::{
    CardList, Contact, Experience, PageHeader, Profile, Skills, Social, TitledBlock,
};
use crate::render::{external_link, fill, or_empty, set_markup, set_text};

const NOTE_LABEL: &str = "注：";
const PRIVACY_LABEL: &str = "プライバシーについて：";

/// The about page: each block below is optional and renders on its own.
pub fn render(doc: &mut Document, page: PageData<'_>) {
    if let Some(header) = page.block::<PageHeader>("header") {
        render_page_header(doc, &header);
    }
    if let Some(profile) = page.block::<Profile>("profile") {
        render_profile(doc, &profile);
    }
    if let Some(skills) = page.block::<Skills>("skills") {
        render_skills(doc, &skills);
    }
    if let Some(experience) = page.block::<Experience>("experience") {
        render_experience(doc, &experience);
    }
    if let Some(hobbies) = page.block::<CardList>("hobbies") {
        render_hobbies(doc, &hobbies);
    }
    if let Some(social) = page.block::<Social>("social") {
        render_social(doc, &social);
    }
    if let Some(contact) = page.block::<Contact>("contact") {
        render_contact(doc, &contact);
    }
    if let Some(english) = page.block::<TitledBlock>("english") {
        set_text(doc, ".english-section h3", english.title.as_deref());
    }
}

// shared by the about and howto pages
pub(crate) fn render_page_header(doc: &mut Document, header: &PageHeader) {
    set_text(doc, ".page-header h1", header.title.as_deref());
    set_text(doc, ".page-header p", header.subtitle.as_deref());
}

fn render_profile(doc: &mut Document, profile: &Profile) {
    set_text(doc, ".avatar", profile.avatar.as_deref());
    set_text(doc, ".profile-info h2", profile.name.as_deref());
    set_text(doc, ".profile-title", profile.title.as_deref());
    set_markup(doc, ".profile-description", profile.description.as_deref());
}

fn render_skills(doc: &mut Document, skills: &Skills) {
    set_text(doc, ".skills-section h3", skills.title.as_deref());

    fill(doc, ".skills-grid", skills.categories.as_deref(), |doc, category| {
        let item = doc.create("div.skill-item");
        doc.append_text(item, "h4", or_empty(&category.title));
        let list = doc.append_new(item, "ul");
        for skill in &category.items {
            doc.append_text(list, "li", skill);
        }
        item
    });

    if let Some(note) = &skills.note {
        let markup = format!("<strong>{}</strong> {}", NOTE_LABEL, note);
        set_markup(doc, ".note-box p", Some(&markup));
    }
}

// entries keep the order they are listed in
fn render_experience(doc: &mut Document, experience: &Experience) {
    set_text(doc, ".experience-section h3", experience.title.as_deref());

    fill(doc, ".timeline", experience.items.as_deref(), |doc, entry| {
        let item = doc.create("div.timeline-item");
        doc.append_text(item, "div.timeline-date", or_empty(&entry.date));
        let content = doc.append_new(item, "div.timeline-content");
        doc.append_text(content, "h4", or_empty(&entry.title));
        doc.append_text(content, "p", or_empty(&entry.description));
        item
    });
}

fn render_hobbies(doc: &mut Document, hobbies: &CardList) {
    set_text(doc, ".hobbies-section h3", hobbies.title.as_deref());

    fill(doc, ".hobbies-content", hobbies.items.as_deref(), |doc, hobby| {
        let item = doc.create("div.hobby-item");
        let heading: Vec<&str> = [hobby.icon.as_deref(), hobby.title.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        doc.append_text(item, "h4", &heading.join(" "));
        doc.append_text(item, "p", or_empty(&hobby.description));
        item
    });
}

fn render_social(doc: &mut Document, social: &Social) {
    set_text(doc, ".social-accounts-section h3", social.title.as_deref());
    set_text(doc, ".social-accounts-section > p", social.description.as_deref());

    fill(doc, ".accounts-grid", social.accounts.as_deref(), |doc, account| {
        let item = doc.create("div.account-item");
        doc.append_text(item, "h4", or_empty(&account.name));
        doc.append_text(item, "p", or_empty(&account.description));
        let link = external_link(doc, "a.social-link", &account.url);
        doc.set_text_content(link, or_empty(&account.handle));
        doc.append_child(item, link);
        item
    });
}

fn render_contact(doc: &mut Document, contact: &Contact) {
    set_text(doc, ".contact-section h3", contact.title.as_deref());
    set_text(doc, ".contact-section > p", contact.description.as_deref());

    if let (Some(target), Some(email)) = (doc.query_selector(".email-contact"), &contact.email) {
        doc.clear_children(target);
        doc.append_text(target, "h4", or_empty(&email.title));
        let address = doc.append_new(target, "p");
        doc.append_text(address, "strong", or_empty(&email.address));
        doc.append_text(target, "p.note", or_empty(&email.note));
    }

    fill(doc, ".contact-links", contact.links.as_deref(), |doc, link| {
        let anchor = external_link(doc, "a.contact-link", &link.url);
        doc.set_text_content(anchor, or_empty(&link.text));
        anchor
    });

    if let Some(privacy) = &contact.privacy {
        let markup = format!("<strong>{}</strong><br>{}", PRIVACY_LABEL, privacy);
        set_markup(doc, ".privacy-note p", Some(&markup));
    }
}
