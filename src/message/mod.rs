mod template;

use crate::{
    config::Markers,
    links::{find_loom_url, find_ticket_url},
    payload::PullRequestPayload,
};
use anyhow::Result;
use serde::Serialize;
use template::{handlebars, REVIEW_REQUEST_TEMPLATE};

/// Everything the review request template needs, borrowed from the payload.
#[derive(Debug, Serialize)]
pub struct ReviewRequest<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub file_changes: usize,
    pub ticket_url: Option<&'a str>,
    pub loom_url: Option<&'a str>,
    pub markers: &'a Markers,
}

impl<'a> ReviewRequest<'a> {
    pub fn new(payload: &'a PullRequestPayload, markers: &'a Markers) -> ReviewRequest<'a> {
        ReviewRequest {
            title: &payload.title,
            url: &payload.url,
            file_changes: payload.file_change_count(),
            ticket_url: find_ticket_url(&payload.comments),
            loom_url: find_loom_url(&payload.body),
            markers,
        }
    }
}

pub fn format(payload: &PullRequestPayload, markers: &Markers) -> Result<String> {
    let review_request = ReviewRequest::new(payload, markers);
    log::debug!(
        "ticket link: {:?}, loom link: {:?}",
        review_request.ticket_url,
        review_request.loom_url
    );

    render(&review_request)
}

fn render(review_request: &ReviewRequest) -> Result<String> {
    let hb = handlebars()?;
    let rendered = hb.render(REVIEW_REQUEST_TEMPLATE, review_request)?;
    Ok(rendered.trim().to_owned())
}
