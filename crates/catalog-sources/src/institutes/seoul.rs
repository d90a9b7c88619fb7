//! 서울교육연구정보원: eGovFrame bulletin board.

use catalog_core::normalize::Vocabulary;

use crate::{SourceAdapter, listing::ListingSpec};

const LISTING: ListingSpec = ListingSpec {
  path:          "/cop/bbs/selectBoardList.do?bbsId=BBSMSTR_000000000121",
  row_selector:  "table.board_list tbody tr",
  link_selector: "td.title a",
  date_selector: Some("td.date"),
  header_rows:   0,
};

const VOCABULARY: Vocabulary = Vocabulary {
  guide_markers: &["지도안", "교수학습자료", "수업자료", "교수·학습", "융합 프로젝트"],
  tag_keywords:  &["AI", "인공지능", "디지털", "미래교육", "교육과정", "기초학력", "독서"],
  default_tags:  &["교육", "연구"],
};

pub struct Seoul;

impl SourceAdapter for Seoul {
  fn name_pattern(&self) -> &'static str { "서울교육연구정보원" }

  fn listing(&self) -> &ListingSpec { &LISTING }

  fn vocabulary(&self) -> &Vocabulary { &VOCABULARY }
}
