use anyhow::Result;
use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext,
    RenderErrorReason,
};

pub const REVIEW_REQUEST_TEMPLATE: &str = "review_request";

pub fn handlebars<'hb>() -> Result<Handlebars<'hb>> {
    let mut hb = Handlebars::new();

    let review_request = include_str!("./review_request.hbs");

    hb.register_template_string(REVIEW_REQUEST_TEMPLATE, review_request)?;

    // chat markup, not html
    hb.register_escape_fn(no_escape);

    hb.register_helper("pluralize", Box::new(pluralize_helper));

    Ok(hb)
}

/// `{{pluralize count "word"}}` writes `word`, with a trailing `s` when `count > 1`.
fn pluralize_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let count = h.param(0).and_then(|v| v.value().as_u64()).ok_or(
        RenderErrorReason::ParamTypeMismatchForName(
            "pluralize",
            "count".to_owned(),
            "number".to_owned(),
        ),
    )?;

    let word = h.param(1).and_then(|v| v.value().as_str()).ok_or(
        RenderErrorReason::ParamTypeMismatchForName(
            "pluralize",
            "word".to_owned(),
            "str".to_owned(),
        ),
    )?;

    out.write(word)?;
    if count > 1 {
        out.write("s")?;
    }

    Ok(())
}
