//! HTML pages
//!
//! Minimal server-rendered markup for login, registration, and the practice page.

use interviewer::{COMPANIES, JOB_ROLES};

use crate::auth::Flash;

/// Escape text for HTML element and attribute content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash = flash
        .map(|f| {
            format!(
                r#"<div class="flash {}">{}</div>"#,
                f.kind.as_str(),
                escape_html(&f.message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
{flash}
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

fn credentials_form(action: &str, submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
<label>Username <input type="text" name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">{submit}</button>
</form>"#
    )
}

pub fn login_page(flash: Option<&Flash>) -> String {
    let body = format!(
        "<h1>Login</h1>\n{}\n<p>No account? <a href=\"/register\">Register</a></p>",
        credentials_form("/login", "Login")
    );
    layout("Login", flash, &body)
}

pub fn register_page(flash: Option<&Flash>) -> String {
    let body = format!(
        "<h1>Register</h1>\n{}\n<p>Already registered? <a href=\"/login\">Login</a></p>",
        credentials_form("/register", "Register")
    );
    layout("Register", flash, &body)
}

fn options(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| {
            let v = escape_html(v);
            format!(r#"<option value="{v}">{v}</option>"#)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const PRACTICE_SCRIPT: &str = r#"<script>
async function post(path, body) {
  const res = await fetch(path, {method: "POST", headers: {"Content-Type": "application/json"}, body: JSON.stringify(body)});
  return res.json();
}
document.getElementById("ask").onclick = async () => {
  const data = await post("/ask_question", {company: company.value, role: role.value});
  question.textContent = data.question || data.error;
};
document.getElementById("submit").onclick = async () => {
  const data = await post("/evaluate_answer", {question: question.textContent, answer: answer.value});
  correct.textContent = data.correct_answer || data.error || "";
  feedback.textContent = data.feedback || "";
};
</script>"#;

pub fn index_page(username: &str, flash: Option<&Flash>) -> String {
    let body = format!(
        r#"<p>Signed in as {user} · <a href="/logout">Logout</a></p>
<h1>Interview Practice</h1>
<select id="company">
{companies}
</select>
<select id="role">
{roles}
</select>
<button id="ask">Get question</button>
<pre id="question"></pre>
<textarea id="answer" rows="8" cols="80"></textarea>
<button id="submit">Submit answer</button>
<h2>Correct answer</h2>
<pre id="correct"></pre>
<h2>Feedback</h2>
<pre id="feedback"></pre>
{script}"#,
        user = escape_html(username),
        companies = options(&COMPANIES),
        roles = options(&JOB_ROLES),
        script = PRACTICE_SCRIPT,
    );
    layout("Interview Practice", flash, &body)
}
