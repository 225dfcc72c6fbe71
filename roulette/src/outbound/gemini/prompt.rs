//! Prompt text for the recommendation and reverse-geocode calls.
//!
//! Every clause is chosen by exact match on a preference and written in the
//! requested language.

use crate::domain::ports::RecommendationRequest;
use crate::domain::{Coordinates, DistancePref, Language, PricePref};

fn distance_clause(distance: DistancePref, language: Language) -> &'static str {
    match (distance, language) {
        (DistancePref::Near, Language::Korean) => "매우 가까운, 가급적 도보 15분 이내(약 1km).",
        (DistancePref::Near, Language::English) => {
            "very close, preferably within a 15-minute walk (around 1km)."
        }
        (DistancePref::Normal, Language::Korean) => "적당한 거리, 약 3km 이내.",
        (DistancePref::Normal, Language::English) => "a reasonable distance, within about 3km.",
        (DistancePref::Any, Language::Korean) => "거리는 상관없지만 5km 이내의 흥미로운 곳 위주.",
        (DistancePref::Any, Language::English) => {
            "any distance, but prioritize interesting options within 5km."
        }
    }
}

fn price_clause(price: PricePref, language: Language) -> &'static str {
    match (price, language) {
        (PricePref::Cheap, Language::Korean) => "저렴하고 가성비 좋은 곳.",
        (PricePref::Cheap, Language::English) => "an affordable, budget-friendly place.",
        (PricePref::Normal, Language::Korean) => "표준적인, 적당한 가격대의 곳.",
        (PricePref::Normal, Language::English) => "a place with standard, moderate prices.",
        (PricePref::Expensive, Language::Korean) => "고급스럽거나 특별한 날에 갈 만한 레스토랑.",
        (PricePref::Expensive, Language::English) => "a high-end or special occasion restaurant.",
        (PricePref::Any, Language::Korean) => "어떤 가격대든 괜찮음.",
        (PricePref::Any, Language::English) => "any price range is acceptable.",
    }
}

fn exclusion_clause(names: &[String], language: Language) -> String {
    if names.is_empty() {
        return match language {
            Language::Korean => "첫 추천이라 제외할 곳이 없습니다.".to_owned(),
            Language::English => {
                "This is the first recommendation, so there's nothing to exclude.".to_owned()
            }
        };
    }
    let listed = names.join(", ");
    match language {
        Language::Korean => format!("다음 장소들은 제외하고 추천해주세요: {listed}."),
        Language::English => {
            format!("Do not recommend any of the following places again: {listed}.")
        }
    }
}

fn language_directive(language: Language) -> &'static str {
    match language {
        Language::Korean => {
            "사용자를 위해 추천하는 매력적인 '이유(reason)'를 반드시 한국어로 생성해주세요."
        }
        Language::English => "Generate a compelling 'reason' for the recommendation in English.",
    }
}

/// Prompt asking for one real restaurant matching `request`.
pub(super) fn recommendation_prompt(request: &RecommendationRequest) -> String {
    let RecommendationRequest {
        coordinates,
        filters,
        exclude_names,
        language,
    } = request;
    format!(
        "You are a helpful assistant that recommends a single, real-world restaurant in South \
         Korea for a user who can't decide where to eat.\n\n\
         User's current location:\n\
         - Latitude: {latitude}\n\
         - Longitude: {longitude}\n\n\
         User's preferences:\n\
         - Distance: {distance}\n\
         - Price: {price}\n\n\
         Exclusion List:\n\
         - {exclusions}\n\n\
         Your task is to find one great restaurant that fits these criteria. Be creative and \
         pick something interesting. It must be a real place.\n\
         Provide your response in a JSON format that strictly adheres to the provided schema.\n\
         {directive}",
        latitude = coordinates.latitude(),
        longitude = coordinates.longitude(),
        distance = distance_clause(filters.distance, *language),
        price = price_clause(filters.price, *language),
        exclusions = exclusion_clause(exclude_names, *language),
        directive = language_directive(*language),
    )
}

/// Prompt asking for a single-line street address, with nothing else.
pub(super) fn address_prompt(coordinates: &Coordinates, language: Language) -> String {
    let latitude = coordinates.latitude();
    let longitude = coordinates.longitude();
    match language {
        Language::Korean => format!(
            "좌표(위도: {latitude}, 경도: {longitude})에 해당하는 대한민국 주소를 간결하게 \
             도로명 주소 형식으로 알려주세요. 예를 들어, '서울특별시 강남구 테헤란로 123' \
             처럼요. 다른 설명 없이 주소만 반환해주세요."
        ),
        Language::English => format!(
            "Provide a concise street address for the coordinates (latitude: {latitude}, \
             longitude: {longitude}) in South Korea. For example, '123 Teheran-ro, Gangnam-gu, \
             Seoul'. Return only the address string, with no other text."
        ),
    }
}
