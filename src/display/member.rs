//! Member display formatting

use crate::models::Member;

/// Format the members of a tour
pub fn format_member_list(members: &[Member]) -> String {
    if members.is_empty() {
        return "No members yet. Add one with 'toursplit member add'.".to_string();
    }

    let name_width = members
        .iter()
        .map(|m| m.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<20}  {}\n",
        "Name",
        "Contact",
        "ID",
        name_width = name_width
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<20}  {:-<12}\n",
        "",
        "",
        "",
        name_width = name_width
    ));

    for member in members {
        let contact = if member.contact.is_empty() {
            "-"
        } else {
            member.contact.as_str()
        };
        output.push_str(&format!(
            "{:<name_width$}  {:<20}  {}\n",
            member.name,
            contact,
            member.id,
            name_width = name_width
        ));
    }

    output
}
