//! Infrastructure layer
//! 외부 시스템(snapper CLI/설정 파일/터미널)과 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod config;
pub mod snapper;
pub mod text;
