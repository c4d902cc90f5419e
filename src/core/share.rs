use crate::domain::model::BirthDate;
use crate::utils::error::{MilestoneError, Result};
use url::Url;

/// Query parameter carrying the birth date in a share link.
pub const SHARE_PARAM: &str = "b";

/// `{base}?b=YYYY-MM-DD`. Any query or fragment already on `base` is dropped.
pub fn share_url(base: &str, birth: &BirthDate) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.set_query(None);
    url.set_fragment(None);
    url.query_pairs_mut()
        .append_pair(SHARE_PARAM, &birth.to_string());
    Ok(url)
}

/// The raw, unvalidated birth date from a share link, if it has one.
pub fn birth_param(link: &str) -> Result<Option<String>> {
    let url = Url::parse(link)?;
    Ok(url
        .query_pairs()
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned()))
}

pub fn birth_from_link(link: &str) -> Result<BirthDate> {
    match birth_param(link)? {
        Some(value) => BirthDate::parse(&value),
        None => Err(MilestoneError::MissingBirthDate),
    }
}
