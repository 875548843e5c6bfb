//! Shared email content templates
//!
//! Canonical content generators for the project-submission notification,
//! used by both production (SES) and mock email services.

use crate::SubmissionDetails;

/// Generate plain-text body for a project-submission notification.
pub fn project_submission_text(submission: &SubmissionDetails, dashboard_url: &str) -> String {
    let mut body = format!(
        "New project inquiry\n\n\
        Name: {}\n\
        Email: {}\n\
        Phone: {}\n",
        submission.name, submission.email, submission.phone_number
    );

    if let Some(company) = &submission.company_name {
        body.push_str(&format!("Company: {}\n", company));
    }

    body.push_str(&format!(
        "Project: {}\n\
        Details: {}\n\
        Start Date: {}\n\
        End Date: {}\n\n\
        Visit your admin dashboard to approve:\n\
        {}\n",
        submission.project_title,
        submission.project_details,
        submission.start_date.format("%Y-%m-%d"),
        submission.end_date.format("%Y-%m-%d"),
        dashboard_url
    ));

    body
}

/// Generate styled HTML body for a project-submission notification.
pub fn project_submission_html(submission: &SubmissionDetails, dashboard_url: &str) -> String {
    let company_row = match &submission.company_name {
        Some(company) => format!("<p><strong>Company:</strong> {}</p>", company),
        None => String::new(),
    };

    format!(
        r#"
            <html>
            <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
                <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
                    <h1 style="color: #1a1a2e;">New Project Inquiry</h1>

                    <p><strong>Name:</strong> {name}</p>
                    <p><strong>Email:</strong> {email}</p>
                    <p><strong>Phone:</strong> {phone}</p>
                    {company_row}
                    <p><strong>Project:</strong> {title}</p>
                    <p><strong>Details:</strong> {details}</p>
                    <p><strong>Start Date:</strong> {start}</p>
                    <p><strong>End Date:</strong> {end}</p>

                    <div style="text-align: center; margin: 30px 0;">
                        <a href="{dashboard_url}"
                           style="background-color: #1a1a2e; color: white; padding: 12px 24px; text-decoration: none; border-radius: 4px; display: inline-block; font-weight: bold;">
                            Review Submission
                        </a>
                    </div>

                    <p style="color: #666; font-size: 14px;">
                        Visit your admin dashboard to approve.
                    </p>
                </div>
            </body>
            </html>
        "#,
        name = submission.name,
        email = submission.email,
        phone = submission.phone_number,
        company_row = company_row,
        title = submission.project_title,
        details = submission.project_details,
        start = submission.start_date.format("%Y-%m-%d"),
        end = submission.end_date.format("%Y-%m-%d"),
        dashboard_url = dashboard_url,
    )
}
