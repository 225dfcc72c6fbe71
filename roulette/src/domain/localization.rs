//! User-facing copy for every supported language.
//!
//! Copy lives in two static tables keyed by [`Language`]; nothing is
//! persisted. Presentation code must only obtain strings through
//! [`Translations::for_language`] so a language toggle re-renders everything.

use super::{DistancePref, Language, PriceBand, PricePref};

/// Header copy.
#[derive(Debug)]
pub struct HeaderTexts {
    /// Application name.
    pub title: &'static str,
    /// Tagline under the name.
    pub subtitle: &'static str,
}

/// Copy for the explicit permission prompt screen.
#[derive(Debug)]
pub struct PermissionPromptTexts {
    /// Prompt heading.
    pub title: &'static str,
    /// Why the position is needed.
    pub description: &'static str,
    /// Label of the consent control.
    pub button: &'static str,
    /// Single loader phrase while the position is acquired.
    pub loading: &'static str,
}

/// Copy for the current-location panel on the ready screen.
#[derive(Debug)]
pub struct LocationDisplayTexts {
    /// Heading of the address line.
    pub current_address: &'static str,
    /// Placeholder while the address lookup runs.
    pub fetching_address: &'static str,
    /// Banner shown when the address lookup fails.
    pub address_error: &'static str,
    /// Label of the relocate control.
    pub relocate_button: &'static str,
    /// Label of the relocate control while a position is pending.
    pub relocating_button: &'static str,
}

/// Copy for the filter controls.
#[derive(Debug)]
pub struct FilterTexts {
    /// Heading of the price options.
    pub price: &'static str,
    /// Heading of the distance options.
    pub distance: &'static str,
    price_any: &'static str,
    price_cheap: &'static str,
    price_normal: &'static str,
    price_expensive: &'static str,
    distance_any: &'static str,
    distance_near: &'static str,
    distance_normal: &'static str,
}

impl FilterTexts {
    /// Label for one price option.
    #[must_use]
    pub fn price_option(&self, pref: PricePref) -> &'static str {
        match pref {
            PricePref::Any => self.price_any,
            PricePref::Cheap => self.price_cheap,
            PricePref::Normal => self.price_normal,
            PricePref::Expensive => self.price_expensive,
        }
    }

    /// Label for one distance option.
    #[must_use]
    pub fn distance_option(&self, pref: DistancePref) -> &'static str {
        match pref {
            DistancePref::Any => self.distance_any,
            DistancePref::Near => self.distance_near,
            DistancePref::Normal => self.distance_normal,
        }
    }
}

/// Copy for the recommendation card.
#[derive(Debug)]
pub struct RecommendationCardTexts {
    /// Label of the go-home control.
    pub home: &'static str,
    /// Label of the reroll control.
    pub reroll: &'static str,
    /// Label of the directions control.
    pub directions: &'static str,
    walk_distance: fn(&str, u64) -> String,
    price_cheap: &'static str,
    price_normal: &'static str,
    price_expensive: &'static str,
    price_unknown: &'static str,
}

impl RecommendationCardTexts {
    /// "Approx. {distance} / {minutes} min walk" in the active language.
    #[must_use]
    pub fn walk_distance(&self, distance: &str, minutes: u64) -> String {
        (self.walk_distance)(distance, minutes)
    }

    /// Label for a price band.
    #[must_use]
    pub fn price_band(&self, band: PriceBand) -> &'static str {
        match band {
            PriceBand::Cheap => self.price_cheap,
            PriceBand::Normal => self.price_normal,
            PriceBand::Expensive => self.price_expensive,
            PriceBand::Unknown => self.price_unknown,
        }
    }
}

/// Copy for the fatal error screen.
#[derive(Debug)]
pub struct ErrorDisplayTexts {
    /// Heading of the failure screen.
    pub title: &'static str,
    /// Label of the retry control.
    pub retry: &'static str,
    /// Label of the go-home control.
    pub home: &'static str,
}

/// Suffixes appended to the geolocation failure prefix.
#[derive(Debug)]
pub struct GeolocationErrorTexts {
    /// Shared lead-in of every location failure.
    pub prefix: &'static str,
    /// Suffix for a refused permission.
    pub permission_denied: &'static str,
    /// Suffix when no position could be determined.
    pub position_unavailable: &'static str,
    /// Suffix for an expired request.
    pub timeout: &'static str,
    /// Suffix for anything else.
    pub unknown: &'static str,
}

/// Application-level messages.
#[derive(Debug)]
pub struct AppTexts {
    /// Label of the recommend control.
    pub recommend_button: &'static str,
    /// Location failure messages.
    pub geolocation_errors: GeolocationErrorTexts,
    /// Shown when recommending without a known position.
    pub recommendation_error: &'static str,
    /// Fallback for failures without a message.
    pub unknown_error: &'static str,
    /// Shown when the recommendation service fails.
    pub service_busy: &'static str,
}

/// Every string shown to the user in one language.
#[derive(Debug)]
pub struct Translations {
    /// Header copy.
    pub header: HeaderTexts,
    /// Permission prompt copy.
    pub permission_prompt: PermissionPromptTexts,
    /// Location panel copy.
    pub location_display: LocationDisplayTexts,
    /// Filter control copy.
    pub filters: FilterTexts,
    /// Result card copy.
    pub recommendation_card: RecommendationCardTexts,
    /// Loader phrases cycled while a recommendation is in flight.
    pub loader: [&'static str; 5],
    /// Failure screen copy.
    pub error_display: ErrorDisplayTexts,
    /// Messages not tied to one screen.
    pub app: AppTexts,
    /// Label of the control that switches to the other language.
    pub language_toggle: &'static str,
}

impl Translations {
    /// Static copy table for `language`.
    ///
    /// # Examples
    /// ```
    /// use roulette::domain::{Language, Translations};
    ///
    /// let en = Translations::for_language(Language::English);
    /// assert_eq!(en.header.title, "Restaurant Roulette");
    /// ```
    #[must_use]
    pub fn for_language(language: Language) -> &'static Self {
        match language {
            Language::Korean => &KOREAN,
            Language::English => &ENGLISH,
        }
    }
}

static KOREAN: Translations = Translations {
    header: HeaderTexts {
        title: "맛집 랜덤 룰렛",
        subtitle: "버튼 하나로 오늘의 메뉴 결정!",
    },
    permission_prompt: PermissionPromptTexts {
        title: "맛집 추천을 시작할까요?",
        description: "주변 맛집을 찾으려면 현재 위치 정보가 필요해요. 위치 권한을 허용해주세요.",
        button: "내 주변 맛집 찾기",
        loading: "위치 찾는 중...",
    },
    location_display: LocationDisplayTexts {
        current_address: "현재 주소",
        fetching_address: "주소 변환 중...",
        address_error: "주소를 가져올 수 없습니다.",
        relocate_button: "위치 새로고침",
        relocating_button: "위치 찾는 중...",
    },
    filters: FilterTexts {
        price: "가격대",
        distance: "거리",
        price_any: "상관없음",
        price_cheap: "저렴",
        price_normal: "보통",
        price_expensive: "비쌈",
        distance_any: "상관없음",
        distance_near: "가까움",
        distance_normal: "조금 멀어도 OK",
    },
    recommendation_card: RecommendationCardTexts {
        home: "홈으로",
        reroll: "다시 추천",
        directions: "길찾기",
        walk_distance: korean_walk_distance,
        price_cheap: "저렴",
        price_normal: "보통",
        price_expensive: "비쌈",
        price_unknown: "정보 없음",
    },
    loader: [
        "최적의 맛집을 찾고 있어요...",
        "AI가 열심히 고민 중입니다...",
        "숨겨진 맛집을 탐색합니다...",
        "거의 다 됐어요!",
        "맛있는 상상이 현실로!",
    ],
    error_display: ErrorDisplayTexts {
        title: "이런! 문제가 발생했어요",
        retry: "다시 시도하기",
        home: "홈으로",
    },
    app: AppTexts {
        recommend_button: "오늘 뭐 먹지?",
        geolocation_errors: GeolocationErrorTexts {
            prefix: "위치 정보를 가져올 수 없습니다. ",
            permission_denied: "권한이 거부되었습니다.",
            position_unavailable: "위치를 확인할 수 없습니다.",
            timeout: "시간이 초과되었습니다.",
            unknown: "알 수 없는 오류가 발생했습니다.",
        },
        recommendation_error: "현재 위치를 알 수 없어 추천할 수 없습니다.",
        unknown_error: "알 수 없는 오류가 발생했습니다.",
        service_busy: "추천을 받지 못했습니다. AI가 바쁜 것 같아요. 다시 시도해주세요.",
    },
    language_toggle: "EN",
};

static ENGLISH: Translations = Translations {
    header: HeaderTexts {
        title: "Restaurant Roulette",
        subtitle: "Decide your menu with one button!",
    },
    permission_prompt: PermissionPromptTexts {
        title: "Ready for a recommendation?",
        description: "We need your current location to find great restaurants near you. Please allow location access.",
        button: "Find Restaurants Near Me",
        loading: "Getting location...",
    },
    location_display: LocationDisplayTexts {
        current_address: "Current Address",
        fetching_address: "Fetching address...",
        address_error: "Could not fetch address.",
        relocate_button: "Refresh Location",
        relocating_button: "Finding...",
    },
    filters: FilterTexts {
        price: "Price Range",
        distance: "Distance",
        price_any: "Any",
        price_cheap: "Cheap",
        price_normal: "Normal",
        price_expensive: "Expensive",
        distance_any: "Any",
        distance_near: "Near",
        distance_normal: "A bit far is OK",
    },
    recommendation_card: RecommendationCardTexts {
        home: "Go Home",
        reroll: "Reroll",
        directions: "Directions",
        walk_distance: english_walk_distance,
        price_cheap: "Cheap",
        price_normal: "Normal",
        price_expensive: "Expensive",
        price_unknown: "No info",
    },
    loader: [
        "Finding the perfect spot...",
        "The AI is thinking hard...",
        "Scouting for hidden gems...",
        "Almost there!",
        "Delicious ideas coming right up!",
    ],
    error_display: ErrorDisplayTexts {
        title: "Oops! Something went wrong",
        retry: "Retry",
        home: "Go Home",
    },
    app: AppTexts {
        recommend_button: "What should I eat today?",
        geolocation_errors: GeolocationErrorTexts {
            prefix: "Could not get location information. ",
            permission_denied: "Permission was denied.",
            position_unavailable: "Location is unavailable.",
            timeout: "The request timed out.",
            unknown: "An unknown error occurred.",
        },
        recommendation_error: "Cannot recommend without knowing your current location.",
        unknown_error: "An unknown error occurred.",
        service_busy: "Failed to get a recommendation. The AI might be busy, please try again.",
    },
    language_toggle: "한국어",
};

fn korean_walk_distance(distance: &str, minutes: u64) -> String {
    format!("약 {distance} / 도보 {minutes}분")
}

fn english_walk_distance(distance: &str, minutes: u64) -> String {
    format!("Approx. {distance} / {minutes} min walk")
}
