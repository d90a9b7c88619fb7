//! 인천교육과학정보원.

use catalog_core::normalize::Vocabulary;

use crate::{SourceAdapter, listing::ListingSpec};

const LISTING: ListingSpec = ListingSpec {
  path:          "/boardCnts/list.do?boardID=1624&m=0301&s=ice",
  row_selector:  "table.board_type01 tbody tr",
  link_selector: "td.tit a",
  date_selector: Some("td.date"),
  header_rows:   0,
};

const VOCABULARY: Vocabulary = Vocabulary {
  guide_markers: &["지도안", "교수학습자료", "수업자료", "실험 활동"],
  tag_keywords:  &["AI", "과학", "정보", "SW", "코딩", "디지털", "탐구"],
  default_tags:  &["교육", "과학", "정보"],
};

pub struct Incheon;

impl SourceAdapter for Incheon {
  fn name_pattern(&self) -> &'static str { "인천교육과학정보원" }

  fn listing(&self) -> &ListingSpec { &LISTING }

  fn vocabulary(&self) -> &Vocabulary { &VOCABULARY }
}
