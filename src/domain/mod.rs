//! Domain layer
//! 스냅샷 레코드, snapper 출력 파서, 페이지/정리 설정 규칙을 외부 의존성 없이 표현한다.

pub mod changes;
pub mod cleanup;
pub mod paging;
pub mod rollback;
pub mod snapshot;
