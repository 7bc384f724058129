#[cfg(test)]
#[path = "profile_view_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::wrap_text;
use crate::domain::models::Experience;
use crate::domain::models::Profile;
use crate::domain::models::Project;

const INDENT: &str = "  ";

fn heading_style() -> Style {
    return Style {
        fg: Some(Color::Yellow),
        ..Style::default()
    }
    .add_modifier(Modifier::BOLD);
}

fn muted_style() -> Style {
    return Style {
        fg: Some(Color::DarkGray),
        ..Style::default()
    };
}

fn accent_style() -> Style {
    return Style {
        fg: Some(Color::Cyan),
        ..Style::default()
    };
}

/// Static résumé page. Built once per width and scrolled by the UI.
pub struct ProfileView {
    width: usize,
    lines: Vec<Line<'static>>,
}

impl ProfileView {
    pub fn new(profile: &Profile, width: usize) -> ProfileView {
        let mut view = ProfileView {
            width: width.max(10),
            lines: vec![],
        };

        view.header(profile);
        view.skills(profile);
        view.featured_work(profile);
        view.contributions(profile);
        view.timeline(profile);
        view.recognition(profile);
        view.contact(profile);

        return view;
    }

    pub fn lines(&self) -> &[Line<'static>] {
        return &self.lines;
    }

    /// Unstyled rendition used for `folio profile --format text`.
    pub fn plain_text(&self) -> String {
        return self
            .lines
            .iter()
            .map(|line| {
                return line
                    .spans
                    .iter()
                    .map(|span| return span.content.to_string())
                    .collect::<String>()
                    .trim_end()
                    .to_string();
            })
            .collect::<Vec<String>>()
            .join("\n");
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn section(&mut self, title: &str) {
        if !self.lines.is_empty() {
            self.blank();
        }
        self.lines
            .push(Line::from(Span::styled(title.to_uppercase(), heading_style())));
        self.lines.push(Line::from(Span::styled(
            "─".repeat(title.chars().count().min(self.width)),
            heading_style(),
        )));
    }

    fn paragraph(&mut self, text: &str, indent: &str, style: Style) {
        let width = self.width.saturating_sub(indent.len()).max(1);
        for line in wrap_text(text, width) {
            self.lines.push(Line::from(vec![
                Span::from(indent.to_string()),
                Span::styled(line, style),
            ]));
        }
    }

    fn bullets(&mut self, items: &[String], indent: &str) {
        let width = self.width.saturating_sub(indent.len() + 2).max(1);
        for item in items {
            for (idx, line) in wrap_text(item, width).into_iter().enumerate() {
                let marker = if idx == 0 { "• " } else { "  " };
                self.lines.push(Line::from(vec![
                    Span::from(format!("{indent}{marker}")),
                    Span::from(line),
                ]));
            }
        }
    }

    fn link(&mut self, label: &str, url: &str, indent: &str) {
        self.lines.push(Line::from(vec![
            Span::from(indent.to_string()),
            Span::styled(format!("{label}: "), muted_style()),
            Span::styled(url.to_string(), accent_style().add_modifier(Modifier::UNDERLINED)),
        ]));
    }

    fn header(&mut self, profile: &Profile) {
        self.lines.push(Line::from(Span::styled(
            profile.name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        self.paragraph(&profile.title, "", accent_style());
        self.paragraph(
            &format!("{} years of experience", profile.years_of_experience),
            "",
            muted_style(),
        );

        self.section("About");
        self.paragraph(&profile.summary, "", Style::default());
    }

    fn skills(&mut self, profile: &Profile) {
        self.section("Technical Arsenal");
        for (heading, skills) in profile.skills.categories() {
            if skills.is_empty() {
                continue;
            }

            self.lines.push(Line::from(Span::styled(
                heading.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            self.paragraph(&skills.join(" · "), INDENT, Style::default());
        }
    }

    fn project(&mut self, project: &Project) {
        self.lines.push(Line::from(Span::styled(
            project.title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        self.paragraph(&project.description, INDENT, Style::default());
        if !project.tags.is_empty() {
            let tags = project
                .tags
                .iter()
                .map(|tag| return format!("[{tag}]"))
                .collect::<Vec<String>>()
                .join(" ");
            self.paragraph(&tags, INDENT, accent_style());
        }
        self.bullets(&project.metrics, INDENT);
        if let Some(link) = &project.link {
            self.link("Live", link, INDENT);
        }
        if let Some(github) = &project.github {
            self.link("Source", github, INDENT);
        }
    }

    fn featured_work(&mut self, profile: &Profile) {
        let projects = profile.featured_projects();
        if projects.is_empty() {
            return;
        }

        self.section("Featured Work");
        for (idx, project) in projects.into_iter().enumerate() {
            if idx > 0 {
                self.blank();
            }
            self.project(project);
        }
    }

    fn contributions(&mut self, profile: &Profile) {
        let projects = profile.additional_projects();
        if projects.is_empty() {
            return;
        }

        self.section("Technical Contributions");
        for (idx, project) in projects.into_iter().enumerate() {
            if idx > 0 {
                self.blank();
            }
            self.project(project);
        }
    }

    fn experience(&mut self, experience: &Experience) {
        let mut title = vec![Span::styled(
            format!("{} @ {}", experience.role, experience.company),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if experience.is_current {
            title.push(Span::from(" "));
            title.push(Span::styled(
                " Current Role ",
                Style {
                    fg: Some(Color::Black),
                    bg: Some(Color::Green),
                    ..Style::default()
                },
            ));
        }
        self.lines.push(Line::from(title));
        self.paragraph(
            &format!("{} · {}", experience.location, experience.duration),
            INDENT,
            muted_style(),
        );
        self.bullets(&experience.description, INDENT);
        if let Some(link) = &experience.link {
            self.link(experience.link_label(), link, INDENT);
        }
    }

    fn timeline(&mut self, profile: &Profile) {
        self.section("Professional Timeline");
        for (idx, experience) in profile.experience.iter().enumerate() {
            if idx > 0 {
                self.blank();
            }
            self.experience(experience);
        }
    }

    fn recognition(&mut self, profile: &Profile) {
        if profile.certifications.is_empty() && profile.honors.is_empty() {
            return;
        }

        self.section("Recognition");
        for cert in profile.certifications.iter() {
            self.lines.push(Line::from(Span::styled(
                cert.name.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            self.paragraph(
                &format!("{} · {}", cert.issuer, cert.date),
                INDENT,
                muted_style(),
            );
        }
        for honor in profile.honors.iter() {
            self.lines.push(Line::from(Span::styled(
                format!("★ {}", honor.title),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            self.paragraph(&honor.date, INDENT, muted_style());
            self.paragraph(&honor.description, INDENT, Style::default());
        }
    }

    fn contact(&mut self, profile: &Profile) {
        self.section("Contact");
        self.link("Email", &profile.socials.email, "");
        self.link("LinkedIn", &profile.socials.linkedin, "");
        self.link("GitHub", &profile.socials.github, "");
    }
}
