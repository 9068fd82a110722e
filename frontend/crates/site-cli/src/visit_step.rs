use crate::AppError;

use std::str::FromStr;

use site_router::ScrollPosition;

/// One step of `site visit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitStep {
    Navigate(String),
    Back,
    Forward,
    Scroll(ScrollPosition),
}

impl FromStr for VisitStep {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "back" => return Ok(Self::Back),
            "forward" => return Ok(Self::Forward),
            _ => {}
        }

        if let Some(offset) = s.strip_prefix("scroll:") {
            return parse_offset(offset).map(Self::Scroll).ok_or_else(|| {
                AppError::invalid_step(s, "expected scroll:<top> or scroll:<left>,<top>")
            });
        }

        if s.starts_with('/') || s.starts_with('#') {
            return Ok(Self::Navigate(s.to_string()));
        }

        Err(AppError::invalid_step(s, "hrefs must start with '/' or '#'"))
    }
}

fn parse_offset(offset: &str) -> Option<ScrollPosition> {
    match offset.split_once(',') {
        Some((left, top)) => Some(ScrollPosition::new(
            left.trim().parse().ok()?,
            top.trim().parse().ok()?,
        )),
        None => Some(ScrollPosition::new(0, offset.trim().parse().ok()?)),
    }
}
