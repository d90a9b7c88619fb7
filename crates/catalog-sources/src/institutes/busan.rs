//! 부산교육연구소: gnuboard listing whose first row is the column header.

use catalog_core::normalize::Vocabulary;

use crate::{SourceAdapter, listing::ListingSpec};

const LISTING: ListingSpec = ListingSpec {
  path:          "/bbs/board.php?bo_table=data",
  row_selector:  "table.board_list tr",
  link_selector: "td.subject a",
  date_selector: Some("td.date"),
  header_rows:   1,
};

const VOCABULARY: Vocabulary = Vocabulary {
  guide_markers: &["지도안", "수업자료", "교수학습", "수업 사례"],
  tag_keywords:  &["AI", "디지털", "미래교육", "진로", "인성", "교육과정"],
  default_tags:  &["교육", "연구"],
};

pub struct Busan;

impl SourceAdapter for Busan {
  fn name_pattern(&self) -> &'static str { "부산교육연구소" }

  fn listing(&self) -> &ListingSpec { &LISTING }

  fn vocabulary(&self) -> &Vocabulary { &VOCABULARY }
}
