/// All localized user-facing strings for one language.
///
/// Every language fills the same fields, so bundles are shape-identical by
/// construction. Placeholders use `{name}` syntax and are substituted with
/// [`LanguageStrings::format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStrings {
    // ==================== Navigation ====================
    pub nav_dashboard: &'static str,
    pub nav_bills: &'static str,
    pub nav_wallet: &'static str,
    pub nav_donation: &'static str,
    pub nav_insurance: &'static str,
    pub nav_referral: &'static str,
    pub nav_food: &'static str,

    // ==================== Dashboard ====================
    /// Placeholders: {name}
    pub greeting: &'static str,
    pub wallet_balance: &'static str,
    pub pay_bill: &'static str,
    /// Placeholders: {code}
    pub referral_share: &'static str,

    // ==================== Food Menu ====================
    pub menu_add_to_cart: &'static str,
    /// Toast shown after the cart mutation. Placeholders: {item}
    pub menu_added_to_cart: &'static str,
    /// Placeholders: {price}
    pub menu_price: &'static str,

    // ==================== Chrome ====================
    pub loading: &'static str,
    pub language_label: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
}

impl LanguageStrings {
    /// Key/value pairs in declaration order.
    ///
    /// Keys are the field names, identical for every bundle.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("nav_dashboard", self.nav_dashboard),
            ("nav_bills", self.nav_bills),
            ("nav_wallet", self.nav_wallet),
            ("nav_donation", self.nav_donation),
            ("nav_insurance", self.nav_insurance),
            ("nav_referral", self.nav_referral),
            ("nav_food", self.nav_food),
            ("greeting", self.greeting),
            ("wallet_balance", self.wallet_balance),
            ("pay_bill", self.pay_bill),
            ("referral_share", self.referral_share),
            ("menu_add_to_cart", self.menu_add_to_cart),
            ("menu_added_to_cart", self.menu_added_to_cart),
            ("menu_price", self.menu_price),
            ("loading", self.loading),
            ("language_label", self.language_label),
            ("theme_dark", self.theme_dark),
            ("theme_light", self.theme_light),
        ]
    }

    /// Look up a string by key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Substitute `{name}` placeholders in a template.
    ///
    /// Unknown placeholders are left as-is.
    pub fn format(template: &str, args: &[(&str, &str)]) -> String {
        let mut result = template.to_string();
        for (name, value) in args {
            result = result.replace(&format!("{{{name}}}"), value);
        }
        result
    }
}

// ==================== Indonesian Strings ====================

/// Indonesian language strings (default)
pub static INDONESIAN_STRINGS: LanguageStrings = LanguageStrings {
    nav_dashboard: "Dasbor",
    nav_bills: "Tagihan",
    nav_wallet: "Dompet",
    nav_donation: "Donasi",
    nav_insurance: "Asuransi",
    nav_referral: "Referral",
    nav_food: "Pesan Makanan",

    greeting: "Selamat datang kembali, {name}",
    wallet_balance: "Saldo",
    pay_bill: "Bayar tagihan",
    referral_share: "Bagikan kode {code} dan dapatkan bonus",

    menu_add_to_cart: "Tambah ke keranjang",
    menu_added_to_cart: "{item} ditambahkan ke keranjang",
    menu_price: "Harga: {price}",

    loading: "Memuat...",
    language_label: "Bahasa",
    theme_dark: "Mode gelap",
    theme_light: "Mode terang",
};

// ==================== English Strings ====================

pub static ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    nav_dashboard: "Dashboard",
    nav_bills: "Bills",
    nav_wallet: "Wallet",
    nav_donation: "Donation",
    nav_insurance: "Insurance",
    nav_referral: "Referral",
    nav_food: "Order Food",

    greeting: "Welcome back, {name}",
    wallet_balance: "Balance",
    pay_bill: "Pay bill",
    referral_share: "Share code {code} and earn a bonus",

    menu_add_to_cart: "Add to cart",
    menu_added_to_cart: "{item} added to cart",
    menu_price: "Price: {price}",

    loading: "Loading...",
    language_label: "Language",
    theme_dark: "Dark mode",
    theme_light: "Light mode",
};

// ==================== Arabic Strings ====================

pub static ARABIC_STRINGS: LanguageStrings = LanguageStrings {
    nav_dashboard: "لوحة التحكم",
    nav_bills: "الفواتير",
    nav_wallet: "المحفظة",
    nav_donation: "التبرع",
    nav_insurance: "التأمين",
    nav_referral: "الإحالة",
    nav_food: "طلب الطعام",

    greeting: "مرحبًا بعودتك، {name}",
    wallet_balance: "الرصيد",
    pay_bill: "دفع الفاتورة",
    referral_share: "شارك الرمز {code} واحصل على مكافأة",

    menu_add_to_cart: "أضف إلى السلة",
    menu_added_to_cart: "تمت إضافة {item} إلى السلة",
    menu_price: "السعر: {price}",

    loading: "جارٍ التحميل...",
    language_label: "اللغة",
    theme_dark: "الوضع الداكن",
    theme_light: "الوضع الفاتح",
};
