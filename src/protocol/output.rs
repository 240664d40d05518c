use serde::Serialize;

use crate::domain::Run;

/// The routing result written to stdout: the event plus its runs, in order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOutput<'a> {
    pub event: &'a str,
    pub action: Option<&'a str>,
    pub runs: &'a [Run],
}
