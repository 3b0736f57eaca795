//! Clinic directory: public dental services across the provinces.

use crate::models::{DirectoryResource, Province, ResourceCategory};

pub const ALL_CATEGORIES: &str = "All";
pub const ALL_PROVINCES: &str = "All Provinces";

#[allow(clippy::too_many_arguments)]
const fn clinic(
    id: &'static str,
    name: &'static str,
    address: &'static str,
    province: Province,
    kind: &'static str,
    hours: &'static str,
    services: &'static str,
    phone: &'static str,
) -> DirectoryResource {
    DirectoryResource {
        id,
        name,
        address,
        province,
        category: ResourceCategory::PublicDentalClinic,
        kind,
        hours: Some(hours),
        services,
        phone,
        is_helpline: false,
    }
}

pub static RESOURCES: [DirectoryResource; 11] = [
    DirectoryResource {
        category: ResourceCategory::CommunityHealthCenter,
        ..clinic(
            "mp-chc-1",
            "Mitchells Plain Community Health Centre",
            "8 AZ Berman Dr, Mitchells Plain, Cape Town, 7785",
            Province::WesternCape,
            "Public Service",
            "Mon-Fri, 7:30am-4pm",
            "General check-ups, cleanings, fillings, extractions, emergency care.",
            "(021) 392-5161",
        )
    },
    clinic(
        "uwc-mp-1",
        "UWC Oral Health Centre - Mitchells Plain",
        "Melomed Centre, Symphony Walk, Town Centre, Mitchells Plain, Cape Town, 7785",
        Province::WesternCape,
        "University Training Clinic",
        "Mon-Fri, 8:30am-4pm",
        "Student-led check-ups, cleanings, fillings, extractions under supervision.",
        "(021) 392-2450",
    ),
    clinic(
        "cmjah-clinic-1",
        "Charlotte Maxeke Johannesburg Academic Hospital (Dental Clinic)",
        "Parktown, Johannesburg, 2193",
        Province::Gauteng,
        "Public Hospital",
        "Referral-based",
        "Specialized dental services, oral surgery, orthodontics, routine care.",
        "(011) 488-4911",
    ),
    clinic(
        "tygerberg-ohc-1",
        "UWC Oral Health Centre (Tygerberg Hospital)",
        "Francie Van Zijl Dr, Tygerberg Hospital, Cape Town, 7505",
        Province::WesternCape,
        "University Training Hospital",
        "Mon-Fri, 8am-4pm",
        "Comprehensive dental care, specialist consultations, student-led clinics.",
        "(021) 937-3000",
    ),
    clinic(
        "kdhc-clinic-1",
        "King Dinuzulu Hospital Complex (Dental Clinic)",
        "Springfield, Durban, 4091",
        Province::KwaZuluNatal,
        "Public Hospital",
        "Mon-Fri, 7:30am-4pm",
        "Emergency dental, extractions, fillings, and pediatric dentistry.",
        "(031) 242-6000",
    ),
    clinic(
        "cmh-clinic-1",
        "Cecilia Makiwane Hospital (Dental Department)",
        "Billie Rd, Mdantsane Unit 4, Mdantsane, 5219",
        Province::EasternCape,
        "Public Hospital",
        "Mon-Fri, 8am-4pm",
        "General dentistry, extractions, and oral health screenings.",
        "(043) 708-2111",
    ),
    clinic(
        "pah-clinic-1",
        "Pelonomi Academic Hospital (Oral Health Centre)",
        "Ashbury, Bloemfontein, 9301",
        Province::FreeState,
        "Public Hospital",
        "Mon-Fri, 7:30am-4pm",
        "Comprehensive dental care including minor oral surgery.",
        "(051) 405-1911",
    ),
    clinic(
        "pph-clinic-1",
        "Polokwane Provincial Hospital (Dental Clinic)",
        "Cnr, Dorp St, Hospital Park, Polokwane, 0699",
        Province::Limpopo,
        "Public Hospital",
        "Mon-Fri, 7:30am-4pm",
        "General and emergency dental services for the Limpopo province.",
        "(015) 287-5000",
    ),
    clinic(
        "rfh-clinic-1",
        "Rob Ferreira Hospital (Dental Clinic)",
        "Sonheuwel, Mbombela, 1201",
        Province::Mpumalanga,
        "Public Hospital",
        "Mon-Fri, 7am-4pm",
        "Provides essential dental care, including extractions and fillings.",
        "(013) 741-6100",
    ),
    clinic(
        "jsth-clinic-1",
        "Job Shimankana Tabane Hospital (Dental Clinic)",
        "Cnr Heystek and, Bosch St, Rustenburg, 0299",
        Province::NorthWest,
        "Public Hospital",
        "Mon-Fri, 8am-4pm",
        "Public dental services for the Bojanala Platinum District.",
        "(014) 590-5100",
    ),
    clinic(
        "rmsh-clinic-1",
        "Robert Mangaliso Sobukwe Hospital (Dental Clinic)",
        "144 Du Toitspan Rd, Memorial Road Area, Kimberley, 8301",
        Province::NorthernCape,
        "Public Hospital",
        "Mon-Fri, 8am-4pm",
        "Dental and oral health services for the Northern Cape.",
        "(053) 802-9111",
    ),
];

pub fn resources() -> &'static [DirectoryResource] {
    &RESOURCES
}

/// Category choices offered by the filter, "All" first.
pub fn category_options() -> Vec<&'static str> {
    std::iter::once(ALL_CATEGORIES)
        .chain(
            ResourceCategory::ALL
                .iter()
                .filter(|c| **c != ResourceCategory::CrisisHelpline)
                .map(|c| c.as_str()),
        )
        .collect()
}

/// Province choices offered by the filter, alphabetical after "All Provinces".
pub fn province_options() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Province::ALL
        .iter()
        .filter(|p| **p != Province::Nationwide)
        .map(|p| p.as_str())
        .collect();
    names.sort_unstable();
    std::iter::once(ALL_PROVINCES).chain(names).collect()
}

// ═══════════════════════════════════════════
// Filtering
// ═══════════════════════════════════════════

/// Current directory filter. `None` means "All" for category and province.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    pub category: Option<ResourceCategory>,
    pub province: Option<Province>,
    pub search: String,
}

impl DirectoryFilter {
    /// Build from the select-box labels. Unknown labels behave like "All".
    pub fn from_labels(category: &str, province: &str, search: &str) -> Self {
        Self {
            category: category.parse().ok(),
            province: province.parse().ok(),
            search: search.to_string(),
        }
    }

    pub fn matches(&self, resource: &DirectoryResource) -> bool {
        let category_ok = self.category.map_or(true, |c| resource.category == c);
        let province_ok = self.province.map_or(true, |p| {
            resource.province == p || resource.province == Province::Nationwide
        });
        category_ok && province_ok && self.matches_search(resource)
    }

    fn matches_search(&self, resource: &DirectoryResource) -> bool {
        let needle = self.search.to_lowercase();
        [resource.name, resource.address, resource.services]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, resources: &'a [DirectoryResource]) -> Vec<&'a DirectoryResource> {
        resources.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Phone number for a `tel:` link, whitespace removed.
pub fn dial_string(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(filter: &DirectoryFilter) -> Vec<&'static str> {
        filter.apply(resources()).iter().map(|r| r.id).collect()
    }

    #[test]
    fn default_filter_lists_everything() {
        assert_eq!(ids(&DirectoryFilter::default()).len(), 11);
    }

    #[test]
    fn category_filter() {
        let filter = DirectoryFilter {
            category: Some(ResourceCategory::CommunityHealthCenter),
            ..Default::default()
        };
        assert_eq!(ids(&filter), vec!["mp-chc-1"]);
    }

    #[test]
    fn province_filter() {
        let filter = DirectoryFilter::from_labels(ALL_CATEGORIES, "Western Cape", "");
        assert_eq!(ids(&filter), vec!["mp-chc-1", "uwc-mp-1", "tygerberg-ohc-1"]);
    }

    #[test]
    fn nationwide_matches_any_province() {
        let helpline = DirectoryResource {
            id: "helpline-1",
            name: "Dental Helpline",
            address: "Telephonic",
            province: Province::Nationwide,
            category: ResourceCategory::CrisisHelpline,
            kind: "Helpline",
            hours: None,
            services: "Advice",
            phone: "0800 000 000",
            is_helpline: true,
        };
        let filter = DirectoryFilter::from_labels(ALL_CATEGORIES, "Limpopo", "");
        assert!(filter.matches(&helpline));
    }

    #[test]
    fn search_covers_name_address_and_services() {
        let by_name = DirectoryFilter::from_labels(ALL_CATEGORIES, ALL_PROVINCES, "tygerberg");
        assert_eq!(ids(&by_name), vec!["tygerberg-ohc-1"]);

        let by_address = DirectoryFilter::from_labels(ALL_CATEGORIES, ALL_PROVINCES, "DURBAN");
        assert_eq!(ids(&by_address), vec!["kdhc-clinic-1"]);

        let by_service = DirectoryFilter::from_labels(ALL_CATEGORIES, ALL_PROVINCES, "pediatric");
        assert_eq!(ids(&by_service), vec!["kdhc-clinic-1"]);
    }

    #[test]
    fn filters_combine() {
        let filter = DirectoryFilter::from_labels("Public Dental Clinic", "Western Cape", "student");
        assert_eq!(ids(&filter), vec!["uwc-mp-1", "tygerberg-ohc-1"]);

        let none = DirectoryFilter::from_labels("Community Health Center", "Gauteng", "");
        assert!(ids(&none).is_empty());
    }

    #[test]
    fn filter_options() {
        let categories = category_options();
        assert_eq!(categories[0], "All");
        assert_eq!(categories.len(), 5);
        assert!(!categories.contains(&"Crisis Helpline"));

        let provinces = province_options();
        assert_eq!(provinces[0], "All Provinces");
        assert_eq!(provinces[1], "Eastern Cape");
        assert_eq!(provinces.len(), 10);
        assert!(!provinces.contains(&"Nationwide"));
    }

    #[test]
    fn dial_string_strips_spaces() {
        assert_eq!(dial_string("(021) 392-5161"), "(021)392-5161");
        assert_eq!(dial_string("0800 000 000"), "0800000000");
    }
}
