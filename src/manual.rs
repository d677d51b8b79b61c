// src/manual.rs
//
// Hand-checked dataset of Seoul public tennis-court listings. This is the
// system of record when the portal markup drifts: entries here bypass
// field extraction entirely and pass through the pipeline verbatim.

use crate::model::CourtListing;

fn entry(
    name: &str,
    region: &str,
    court_number: &str,
    time_period: &str,
    address: &str,
    detail_text: &str,
) -> CourtListing {
    CourtListing {
        name: s!(name),
        region: s!(region),
        court_number: s!(court_number),
        time_period: s!(time_period),
        address: s!(address),
        phone: s!("02-120"),
        detail_text: s!(detail_text),
        ..CourtListing::default()
    }
}

/// The full manual dataset, one entry per facility/court/time-slot.
/// Duplicate facility keys are expected; the deduplicator folds them
/// into per-facility court-number lists.
pub fn dataset() -> Vec<CourtListing> {
    vec![
        // 한남테니스장 (용산구)
        entry("한남테니스장", "용산구", "3번코트", "주간",
              "서울특별시 용산구 한남동", "한남테니스장 3번코트 주간 이용"),
        entry("한남테니스장", "용산구", "4번코트", "주간",
              "서울특별시 용산구 한남동", "한남테니스장 4번코트 주간 이용"),
        entry("한남테니스장", "용산구", "6번코트", "주간",
              "서울특별시 용산구 한남동", "한남테니스장 6번코트 주간 이용"),
        // 광나루 한강공원 테니스장 (강동구)
        entry("광나루 한강공원 테니스장", "강동구", "8번 코트", "주말/공휴일",
              "서울특별시 강동구 천호동", "광나루 한강공원 테니스장 8번 코트 - 주말,공휴일 이용"),
        entry("광나루 한강공원 테니스장", "강동구", "6번 코트", "주말/공휴일",
              "서울특별시 강동구 천호동", "광나루 한강공원 테니스장 6번 코트 - 주말,공휴일 이용"),
        entry("광나루 한강공원 테니스장", "강동구", "7번 코트", "주말/공휴일",
              "서울특별시 강동구 천호동", "광나루 한강공원 테니스장 7번 코트 - 주말,공휴일 이용"),
        // 잠실 한강공원 테니스장 (송파구)
        entry("잠실 한강공원 테니스장", "송파구", "1번 코트", "주간",
              "서울특별시 송파구 잠실동", "잠실 한강공원 테니스장 1번 코트 주간 이용"),
        entry("잠실 한강공원 테니스장", "송파구", "2번 코트", "주간",
              "서울특별시 송파구 잠실동", "잠실 한강공원 테니스장 2번 코트 주간 이용"),
        entry("잠실 한강공원 테니스장", "송파구", "3번 코트", "야간",
              "서울특별시 송파구 잠실동", "잠실 한강공원 테니스장 3번 코트 야간 이용"),
        entry("잠실 한강공원 테니스장", "송파구", "4번 코트", "야간",
              "서울특별시 송파구 잠실동", "잠실 한강공원 테니스장 4번 코트 야간 이용"),
        // 여의도 한강공원 테니스장 (영등포구)
        entry("여의도 한강공원 테니스장", "영등포구", "1번 코트", "주간",
              "서울특별시 영등포구 여의도동", "여의도 한강공원 테니스장 1번 코트 주간 이용"),
        entry("여의도 한강공원 테니스장", "영등포구", "2번 코트", "주간",
              "서울특별시 영등포구 여의도동", "여의도 한강공원 테니스장 2번 코트 주간 이용"),
        entry("여의도 한강공원 테니스장", "영등포구", "3번 코트", "야간",
              "서울특별시 영등포구 여의도동", "여의도 한강공원 테니스장 3번 코트 야간 이용"),
        // 반포 한강공원 테니스장 (서초구)
        entry("반포 한강공원 테니스장", "서초구", "1번 코트", "주간",
              "서울특별시 서초구 반포동", "반포 한강공원 테니스장 1번 코트 주간 이용"),
        entry("반포 한강공원 테니스장", "서초구", "2번 코트", "주간",
              "서울특별시 서초구 반포동", "반포 한강공원 테니스장 2번 코트 주간 이용"),
        // 뚝섬 한강공원 테니스장 (성동구)
        entry("뚝섬 한강공원 테니스장", "성동구", "1번 코트", "주간",
              "서울특별시 성동구 성수동", "뚝섬 한강공원 테니스장 1번 코트 주간 이용"),
        entry("뚝섬 한강공원 테니스장", "성동구", "2번 코트", "주간",
              "서울특별시 성동구 성수동", "뚝섬 한강공원 테니스장 2번 코트 주간 이용"),
        entry("뚝섬 한강공원 테니스장", "성동구", "3번 코트", "야간",
              "서울특별시 성동구 성수동", "뚝섬 한강공원 테니스장 3번 코트 야간 이용"),
        // 이촌 한강공원 테니스장 (용산구)
        entry("이촌 한강공원 테니스장", "용산구", "1번 코트", "주간",
              "서울특별시 용산구 이촌동", "이촌 한강공원 테니스장 1번 코트 주간 이용"),
        entry("이촌 한강공원 테니스장", "용산구", "2번 코트", "주간",
              "서울특별시 용산구 이촌동", "이촌 한강공원 테니스장 2번 코트 주간 이용"),
        // 망원 한강공원 테니스장 (마포구)
        entry("망원 한강공원 테니스장", "마포구", "1번 코트", "주간",
              "서울특별시 마포구 망원동", "망원 한강공원 테니스장 1번 코트 주간 이용"),
        entry("망원 한강공원 테니스장", "마포구", "2번 코트", "주간",
              "서울특별시 마포구 망원동", "망원 한강공원 테니스장 2번 코트 주간 이용"),
        // 난지 한강공원 테니스장 (마포구)
        entry("난지 한강공원 테니스장", "마포구", "1번 코트", "주간",
              "서울특별시 마포구 상암동", "난지 한강공원 테니스장 1번 코트 주간 이용"),
        entry("난지 한강공원 테니스장", "마포구", "2번 코트", "주간",
              "서울특별시 마포구 상암동", "난지 한강공원 테니스장 2번 코트 주간 이용"),
        // 구민체육관 코트
        entry("강남구민체육관 테니스장", "강남구", "1번 코트", "주간",
              "서울특별시 강남구 역삼동", "강남구민체육관 테니스장 1번 코트 주간 이용"),
        entry("강남구민체육관 테니스장", "강남구", "2번 코트", "야간",
              "서울특별시 강남구 역삼동", "강남구민체육관 테니스장 2번 코트 야간 이용"),
        entry("서초구민체육관 테니스장", "서초구", "1번 코트", "주간",
              "서울특별시 서초구 서초동", "서초구민체육관 테니스장 1번 코트 주간 이용"),
        entry("송파구민체육관 테니스장", "송파구", "1번 코트", "주간",
              "서울특별시 송파구 문정동", "송파구민체육관 테니스장 1번 코트 주간 이용"),
        entry("송파구민체육관 테니스장", "송파구", "2번 코트", "야간",
              "서울특별시 송파구 문정동", "송파구민체육관 테니스장 2번 코트 야간 이용"),
    ]
}
