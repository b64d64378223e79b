//! Companies and job roles offered on the practice page

/// Companies a candidate can practice for
pub const COMPANIES: [&str; 10] = [
    "Google",
    "Microsoft",
    "Amazon",
    "Facebook",
    "Apple",
    "Netflix",
    "Tesla",
    "Adobe",
    "IBM",
    "Salesforce",
];

/// Job roles a candidate can practice for
pub const JOB_ROLES: [&str; 10] = [
    "Software Engineer",
    "Data Scientist",
    "Machine Learning Engineer",
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "Cybersecurity Analyst",
    "Cloud Engineer",
    "DevOps Engineer",
    "AI Researcher",
];
