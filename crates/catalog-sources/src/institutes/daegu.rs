use catalog_core::normalize::Vocabulary;

use crate::{SourceAdapter, listing::ListingSpec};

const LISTING: ListingSpec = ListingSpec {
  path:          "/board/list.do?boardId=BBS_0000008",
  row_selector:  "table.board_list tbody tr",
  link_selector: "td.title a",
  date_selector: Some("td.date"),
  header_rows:   0,
};

// Convergence and maker projects are published as teaching material here.
const VOCABULARY: Vocabulary = Vocabulary {
  guide_markers: &["지도안", "교수학습자료", "융합 프로젝트", "STEAM", "메이커"],
  tag_keywords:  &["AI", "STEAM", "창의", "융합", "메이커", "미래교육"],
  default_tags:  &["교육", "연구", "창의융합"],
};

/// 대구창의융합교육원.
pub struct Daegu;

impl SourceAdapter for Daegu {
  fn name_pattern(&self) -> &'static str { "대구창의융합교육원" }

  fn listing(&self) -> &ListingSpec { &LISTING }

  fn vocabulary(&self) -> &Vocabulary { &VOCABULARY }
}
