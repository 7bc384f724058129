pub fn draft_reply_fixture() -> &'static str {
    return "Sure. [DRAFT_EMAIL: Subject: Question about SAP | Body: Hi, tell me more.]";
}

pub fn multiline_draft_reply_fixture() -> &'static str {
    return r#"
Here's a draft you can send.

[DRAFT_EMAIL: Subject: Interview request | Body: Hi,

I'd love to chat about the SAP HR workflow project.

Thanks!]

Let me know if you'd like any changes.
"#
    .trim();
}

pub fn profile_fixture() -> &'static str {
    return r#"
name: Ada Example
title: Software Engineer
summary: Builds reliable systems.
years_of_experience: "5"
skills:
  programming: [Rust, Python]
  erp: [SAP HR]
  tools: [Git]
  business: [ROI Analysis]
experience:
  - id: acme
    role: Platform Engineer
    company: Acme
    location: Remote
    duration: 2023 - Present
    is_current: true
    description:
      - Cut build times by 30%.
  - id: initech
    role: Intern
    company: Initech
    location: Cape Town
    duration: "2022"
    description:
      - Automated TPS reports.
    link: https://initech.example.com
    link_text: View Reports
projects:
  - id: tracker
    title: Issue Tracker
    description: A tracker for issues.
    tags: [Rust, Postgres]
    metrics: [Fast]
    image: https://example.com/tracker.png
    github: https://github.com/ada/tracker
  - id: notes
    title: Notes App
    description: Takes notes.
    tags: [React]
certifications:
  - id: c1
    name: Cloud Practitioner
    issuer: SAP
    date: "2025"
honors:
  - id: h1
    title: 30% Faster Builds
    description: Recognised for build pipeline work.
    date: "2024"
socials:
  github: https://github.com/ada
  linkedin: https://www.linkedin.com/in/ada
  email: ada@example.com
"#
    .trim();
}
