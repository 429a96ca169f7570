//! Static landing page content.
//!
//! Everything on the page except the catalog and the visitor's own state:
//! the hero banner, apiary facts, delivery options and contact details.

/// Hero banner image.
pub const HERO_IMAGE: &str = "https://cdn.poehali.dev/projects/21a53ae9-1104-4196-b595-52d399b98ddd/files/32d9ca7d-6c24-42b4-893f-6d87bb7ffeeb.jpg";
/// Photo in the "about" section.
pub const APIARY_IMAGE: &str = "https://cdn.poehali.dev/projects/21a53ae9-1104-4196-b595-52d399b98ddd/files/3e74e9dc-78f7-4e4e-8ea9-9175090363c9.jpg";
/// Photo between the bee product cards.
pub const PRODUCTS_IMAGE: &str = "https://cdn.poehali.dev/projects/21a53ae9-1104-4196-b595-52d399b98ddd/files/8158f26c-6822-4a35-916e-1739cff8641b.jpg";

/// Origin allowed in the CSP `img-src` directive.
pub const IMAGE_ORIGIN: &str = "https://cdn.poehali.dev";

/// Orders at or above this total get free delivery within the city.
pub const FREE_CITY_DELIVERY_FROM: u64 = 3_000;
/// Orders at or above this total get a 10% discount and priority shipping.
pub const DISCOUNT_FROM: u64 = 5_000;

/// A headline number in the stats strip.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// An icon + text bullet.
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub icon: &'static str,
    pub text: &'static str,
}

/// A bee product explainer card.
#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub glyph: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// A delivery method.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryOption {
    pub icon: &'static str,
    pub title: &'static str,
    pub price_label: &'static str,
    pub description: &'static str,
}

/// A line in the contact details list.
#[derive(Debug, Clone, Copy)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

/// All static content rendered on the landing page.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub since: &'static str,
    pub hero_image: &'static str,
    pub apiary_image: &'static str,
    pub products_image: &'static str,
    pub stats: Vec<Stat>,
    pub highlights: Vec<Highlight>,
    pub info_left: Vec<InfoCard>,
    pub info_right: Vec<InfoCard>,
    pub delivery: Vec<DeliveryOption>,
    pub free_delivery_from: String,
    pub discount_from: String,
    pub contacts: Vec<ContactDetail>,
}

impl Default for PageContent {
    fn default() -> Self {
        use paseka_core::Price;

        Self {
            brand: "Пасека",
            tagline: "Натуральный мёд",
            since: "2008",
            hero_image: HERO_IMAGE,
            apiary_image: APIARY_IMAGE,
            products_image: PRODUCTS_IMAGE,
            stats: vec![
                Stat { value: "15+", label: "лет на пасеке" },
                Stat { value: "120", label: "пчелосемей" },
                Stat { value: "2000+", label: "довольных клиентов" },
            ],
            highlights: vec![
                Highlight { icon: "🌿", text: "100% натуральный продукт без добавок" },
                Highlight { icon: "🏅", text: "Сертификаты качества Роспотребнадзора" },
                Highlight { icon: "📍", text: "Собственная пасека в экологически чистой зоне" },
                Highlight { icon: "❤️", text: "Производство с любовью уже 15 лет" },
            ],
            info_left: vec![
                InfoCard {
                    glyph: "🍯",
                    title: "Мёд",
                    text: "Природный антисептик и источник энергии. Укрепляет иммунитет, улучшает сон и пищеварение.",
                },
                InfoCard {
                    glyph: "💧",
                    title: "Прополис",
                    text: "Мощный антибактериальный агент. Применяется при простудах, ранах и воспалениях.",
                },
                InfoCard {
                    glyph: "🌼",
                    title: "Перга",
                    text: "«Хлеб пчёл» — самый богатый природный источник аминокислот, витаминов и минералов.",
                },
            ],
            info_right: vec![
                InfoCard {
                    glyph: "✨",
                    title: "Маточное молочко",
                    text: "Редкий и ценный продукт. Повышает жизненный тонус, укрепляет иммунную систему.",
                },
                InfoCard {
                    glyph: "🕯️",
                    title: "Воск",
                    text: "Применяется в косметологии, народной медицине, для изготовления свечей и пропитки дерева.",
                },
                InfoCard {
                    glyph: "🌿",
                    title: "Цветочная пыльца",
                    text: "Природный поливитаминный комплекс. Улучшает работу сердца и повышает работоспособность.",
                },
            ],
            delivery: vec![
                DeliveryOption {
                    icon: "📦",
                    title: "Самовывоз",
                    price_label: "Бесплатно",
                    description: "Бесплатно. Забираете сами с нашей пасеки или точки выдачи в городе. Уточняйте адрес по телефону.",
                },
                DeliveryOption {
                    icon: "🚚",
                    title: "Курьер по городу",
                    price_label: "от 200 ₽",
                    description: "Доставка в день заказа при оформлении до 12:00. Стоимость от 200 ₽. Минимальная сумма заказа 500 ₽.",
                },
                DeliveryOption {
                    icon: "🌍",
                    title: "По России",
                    price_label: "от 350 ₽",
                    description: "Отправка Почтой России или СДЭК. Бережно упаковываем каждую баночку. Сроки 3–14 дней.",
                },
            ],
            free_delivery_from: Price::new(FREE_CITY_DELIVERY_FROM).display_grouped(),
            discount_from: Price::new(DISCOUNT_FROM).display_grouped(),
            contacts: vec![
                ContactDetail { icon: "📞", label: "Телефон", value: "+7 (900) 000-00-00" },
                ContactDetail { icon: "✉️", label: "Email", value: "info@paseka.ru" },
                ContactDetail {
                    icon: "📍",
                    label: "Адрес пасеки",
                    value: "Россия, Тульская область, д. Медовое",
                },
                ContactDetail {
                    icon: "🕘",
                    label: "Режим работы",
                    value: "Пн–Пт: 9:00–18:00, Сб: 10:00–15:00",
                },
            ],
        }
    }
}
