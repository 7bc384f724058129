#[cfg(test)]
#[path = "prompts_test.rs"]
mod tests;

use crate::domain::models::Profile;
use crate::domain::models::DRAFT_MARKER_FORMAT;

/// Builds the instructions sent alongside every question so the model answers
/// on behalf of the profile owner.
pub fn system_prompt(profile: &Profile) -> String {
    let name = &profile.name;
    let mut sections = vec![format!(
        "You are the high-value AI Assistant for {name}.\n{name} is a {title}.",
        title = profile.title
    )];

    let mut summary = vec!["DATA SUMMARY:".to_string()];
    if let Some(role) = profile.current_role() {
        summary.push(format!(
            "- Current Role: {} at {} (since {}). This is the most current position.",
            role.role, role.company, role.duration
        ));
    }
    for (idx, honor) in profile.honors.iter().enumerate() {
        summary.push(format!(
            "- Key Achievement {}: {}. {}",
            idx + 1,
            honor.title,
            honor.description
        ));
    }

    summary.push("- Experience:".to_string());
    for experience in profile.experience.iter() {
        summary.push(format!(
            "    - {} at {} ({}, {}): {}",
            experience.role,
            experience.company,
            experience.location,
            experience.duration,
            experience.description.join(" ")
        ));
    }

    summary.push("- Key Projects:".to_string());
    for (idx, project) in profile.projects.iter().enumerate() {
        summary.push(format!(
            "    {}. {}: {}",
            idx + 1,
            project.title,
            project.description
        ));
    }

    if !profile.certifications.is_empty() {
        let certifications = profile
            .certifications
            .iter()
            .map(|cert| return format!("{} ({}, {})", cert.name, cert.issuer, cert.date))
            .collect::<Vec<String>>()
            .join(", ");
        summary.push(format!("- Qualifications: {certifications}."));
    }

    for (heading, skills) in profile.skills.categories() {
        summary.push(format!("- {heading}: {}.", skills.join(", ")));
    }
    summary.push(format!("- Years of Exp: {}.", profile.years_of_experience));
    sections.push(summary.join("\n"));

    sections.push(format!(
        "TONE:\nProfessional, confident, high-value, and solution-oriented. You are here to market {name}'s skills to potential employers and clients."
    ));

    sections.push(format!(
        r#"SPECIAL INSTRUCTIONS:
1. Always highlight measurable ROI from the achievements above.
2. If the user asks for contact info, provide the LinkedIn profile ({linkedin}) and email ({email}).
3. Keep responses concise and focus on technical breadth and business value.
4. If the user wants to get in touch, you may propose an email to {name}. Write it on its own line exactly as {marker}. The subject must not contain "|" or "]", and the body must not contain "]"."#,
        linkedin = profile.socials.linkedin,
        email = profile.socials.email,
        marker = DRAFT_MARKER_FORMAT,
    ));

    return sections.join("\n\n");
}

/// First assistant turn of every chat session.
pub fn greeting(profile: &Profile) -> String {
    let mut topics = vec![];
    if let Some(role) = profile.current_role() {
        topics.push(format!("the work at {}", role.company));
    }
    if let Some(honor) = profile.honors.first() {
        topics.push(format!("the {} project", honor.title));
    }
    topics.push("any of the skills listed here".to_string());

    return format!(
        "Hello! I'm {}'s AI assistant. Ask me about {}.",
        profile.name,
        join_topics(&topics)
    );
}

fn join_topics(topics: &[String]) -> String {
    if topics.len() < 2 {
        return topics.join("");
    }

    let (rest, last) = topics.split_at(topics.len() - 1);
    return format!("{}, or {}", rest.join(", "), last[0]);
}

/// Fixed replies shown in place of a model response. None of them carry error
/// details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackReplies {
    name: String,
    email: String,
}

impl FallbackReplies {
    pub fn new(profile: &Profile) -> FallbackReplies {
        return FallbackReplies {
            name: profile.name.to_string(),
            email: profile.socials.email.to_string(),
        };
    }

    /// No credentials are configured for the backend.
    pub fn unavailable(&self) -> String {
        return format!(
            "The assistant is in maintenance mode right now. Please contact {} via email ({}) or LinkedIn.",
            self.name, self.email
        );
    }

    /// The backend could not be reached or rejected the request.
    pub fn connection_failed(&self) -> String {
        return format!(
            "I'm having a bit of trouble connecting to my brain right now. Please try again or contact {} directly via email: {}",
            self.name, self.email
        );
    }

    /// The backend answered without any text.
    pub fn empty_response(&self) -> String {
        return format!(
            "I'm sorry, I couldn't process that request right now. You can reach out to {} via LinkedIn for more details!",
            self.name
        );
    }

    /// The request never settled with a reply.
    pub fn interrupted(&self) -> String {
        return format!(
            "I apologize, I'm having trouble connecting right now. Please try again or message {} on LinkedIn.",
            self.name
        );
    }
}
