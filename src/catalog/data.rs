use chrono::NaiveDate;

use crate::entities::{Attraction, Coordinates, Detail, Lodging, Marathon};

const FULL_MARATHON: &str = "42.2 км (полный марафон)";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("catalog dates are valid")
}

fn details(pairs: &[(&str, &str)]) -> Vec<Detail> {
    pairs
        .iter()
        .map(|(label, value)| Detail {
            label: label.to_string(),
            value: value.to_string(),
        })
        .collect()
}

fn lodging(
    name: &str,
    distance_km: f64,
    budget: &str,
    [lon, lat]: [f64; 2],
    address: &str,
    website: &str,
) -> Lodging {
    Lodging {
        name: name.into(),
        distance_km,
        budget: budget.into(),
        coordinates: Some(Coordinates::new(lon, lat)),
        address: address.into(),
        website: Some(website.into()),
    }
}

fn attraction(
    name: &str,
    description: &str,
    [lon, lat]: [f64; 2],
    address: &str,
    website: &str,
) -> Attraction {
    Attraction {
        name: name.into(),
        description: description.into(),
        coordinates: Some(Coordinates::new(lon, lat)),
        address: address.into(),
        website: Some(website.into()),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// An event that only has list-card data and a map pin.
fn listed(
    token: &str,
    name: &str,
    date: NaiveDate,
    location: &str,
    description: &str,
    logo: &str,
    [lon, lat]: [f64; 2],
) -> Marathon {
    Marathon {
        token: token.into(),
        name: name.into(),
        date,
        location: location.into(),
        distance: FULL_MARATHON.into(),
        description: description.into(),
        details: vec![],
        accommodations: vec![],
        restaurants: vec![],
        attractions: vec![],
        map_center: Coordinates::new(lon, lat),
        images: vec![],
        logo: Some(logo.into()),
    }
}

pub fn marathons() -> Vec<Marathon> {
    vec![
        moscow(),
        saint_petersburg(),
        kazan(),
        sochi(),
        vladivostok(),
        listed(
            "yekaterinburg",
            "Екатеринбургский марафон",
            date(2025, 7, 10),
            "Екатеринбург, Россия",
            "Марафон в центре Урала, объединяющий спортсменов со всей страны.",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTGRacBRdS4ihD-2eiYwkMqrRyf-mH4mqsNwg&s",
            [60.5975, 56.8389],
        ),
        listed(
            "novosibirsk",
            "Новосибирский марафон",
            date(2025, 6, 7),
            "Новосибирск, Россия",
            "Один из самых крупных марафонов Сибири с уникальной атмосферой.",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQjVM0qsLLqwbtVlFN_MGlzPn5OaOL-kzC4HQ&s",
            [82.9346, 55.0084],
        ),
        omsk(),
        listed(
            "chelyabinsk",
            "Челябинский марафон",
            date(2025, 5, 19),
            "Челябинск, Россия",
            "Марафон с активной поддержкой местного сообщества в Челябинске.",
            "https://img-fotki.yandex.ru/get/6839/30348152.197/0_80d0d_8d5e86fd_orig",
            [61.4292, 55.1644],
        ),
        listed(
            "nizhny-novgorod",
            "Нижегородский марафон",
            date(2025, 6, 14),
            "Нижний Новгород, Россия",
            "Маршрут через исторический центр Нижнего Новгорода.",
            "https://img.geliophoto.com/nnw/00_nnw.jpg",
            [44.002, 56.3287],
        ),
        listed(
            "samara",
            "Самарский марафон",
            date(2025, 9, 12),
            "Самара, Россия",
            "Яркое спортивное событие на берегу реки Волги.",
            "https://porusski.me/wp-content/uploads/2020/04/%D0%BE%D0%B1%D0%BB%D0%BE%D0%B6%D0%BA%D0%B0-%D1%81%D0%B0%D0%BC%D0%B0%D1%80%D0%B0.jpg",
            [50.1983, 53.1959],
        ),
        listed(
            "ufa",
            "Уфимский марафон",
            date(2025, 8, 10),
            "Уфа, Россия",
            "Марафон, отражающий колорит республики Башкортостан.",
            "https://cdn.tripster.ru/thumbs2/2427a866-49f3-11ee-8bba-4e7c85935a75.1220x600.jpeg",
            [55.9587, 54.7348],
        ),
        listed(
            "krasnoyarsk",
            "Красноярский марафон",
            date(2025, 7, 22),
            "Красноярск, Россия",
            "Марафон с живописными пейзажами центральной Сибири.",
            "https://dostop.ru/wp-content/uploads/2022/12/krasnoyarsk.jpg",
            [92.8932, 56.0153],
        ),
        listed(
            "perm",
            "Пермский марафон",
            date(2025, 8, 30),
            "Пермь, Россия",
            "Событие, объединяющее спортсменов в динамичном городе Перми.",
            "https://cdn.tripster.ru/thumbs2/38deaf5e-474e-11ee-99cc-528c19fed677.1220x600.jpeg",
            [56.2294, 58.0093],
        ),
        listed(
            "irkutsk",
            "Иркутский марафон",
            date(2025, 7, 15),
            "Иркутск, Россия",
            "Марафон с видом на уникальную природу Байкала.",
            "https://cdn.tripster.ru/thumbs2/ff963ff0-e4aa-11ee-877f-7613fb7b1af0.1220x600.jpeg",
            [104.2807, 52.2896],
        ),
    ]
}

fn moscow() -> Marathon {
    Marathon {
        token: "moscow".into(),
        name: "Московский марафон".into(),
        date: date(2025, 9, 20),
        location: "Москва, Россия".into(),
        distance: FULL_MARATHON.into(),
        description: "Московский марафон – крупнейший марафон в России, проходящий по историческим улицам города, включая Красную площадь. Участников ждет захватывающее приключение и поддержка зрителей.".into(),
        details: details(&[
            ("Трассы", "Городские улицы, парки, исторические кварталы"),
            ("Дистанции", "5 км, 10 км, полумарафон, марафон (42.2 км)"),
            ("Рекорды", "Мужчины: 2:10:00, Женщины: 2:30:00"),
            ("Количество участников", "Более 30 000"),
            ("Как добраться", "Метро, автобусы, такси"),
        ]),
        accommodations: vec![
            lodging("Отель Москва Центр", 0.5, "средний", [37.6044, 55.7652], "ул. Тверская, 5", "https://moscowcenterhotel.ru"),
            lodging("Гостиница Империя", 0.8, "премиум", [37.5875, 55.7520], "ул. Арбат, 10", "https://imperiahotel.ru"),
            lodging("Отель Парк Отель", 1.0, "средний", [37.6083, 55.7500], "ул. Знаменка, 15", "https://parkhotel.ru"),
            lodging("Отель Редиссон", 1.5, "премиум", [37.5827, 55.7522], "ул. Новый Арбат, 31", "https://radisson.ru"),
            lodging("Отель Метрополь", 0.7, "средний", [37.6216, 55.7598], "Театральная площадь, 1", "https://metropol.ru"),
        ],
        restaurants: vec![
            lodging("Кафе на Арбате", 1.2, "эконом", [37.6010, 55.7520], "ул. Арбат, 15", "https://arbatcafe.ru"),
            lodging("Ресторан «Москва»", 1.0, "средний", [37.6100, 55.7580], "ул. Новый Арбат, 25", "https://moscowrestaurant.ru"),
            lodging("Шикарный ресторан", 0.9, "премиум", [37.6150, 55.7600], "ул. Тверская, 8", "https://luxurydining.ru"),
            lodging("Ресторан Боско", 1.3, "средний", [37.6200, 55.7530], "Красная площадь, 3", "https://boscorestaurant.ru"),
            lodging("Кафе Пушкин", 0.7, "премиум", [37.6070, 55.7600], "ул. Тверская, 26", "https://cafepushkin.ru"),
        ],
        attractions: vec![
            attraction("Красная площадь", "Знаменитая площадь Москвы.", [37.6208, 55.7539], "Красная площадь", "https://kremlin.ru"),
            attraction("ГУМ", "Исторический торговый комплекс.", [37.6216, 55.7549], "Красная площадь, 3", "https://gum.ru"),
            attraction("Парк Горького", "Популярное место для отдыха и прогулок.", [37.6034, 55.7294], "ул. Крымский Вал, 9", "https://park-gorkogo.ru"),
            attraction("Собор Василия Блаженного", "Символ Москвы.", [37.6231, 55.7525], "Красная площадь, 2", "https://saintbasil.ru"),
            attraction("Московский зоопарк", "Крупный зоопарк с редкими животными.", [37.5733, 55.7602], "ул. Большая Грузинская, 1", "https://moscowzoo.ru"),
        ],
        map_center: Coordinates::new(37.618423, 55.751244),
        images: strings(&[
            "https://media.cnn.com/api/v1/images/stellar/prod/180531144547-03-moscow-attractions-st-basils-cathedral.jpg?q=w_5381,h_3027,x_0,y_0,c_fill",
            "https://www.minib.cz/upItems/imgs/005/moskau_city_54003aee_75b5_4882_99ac_c54c602eadf6_xl.jpg",
            "https://images.squarespace-cdn.com/content/v1/57b9b98a29687f1ef5c622df/1486569993859-HT5WX1Z30ISW0Q5U1ZDG/state+historical+museum+moscow",
            "https://lp-cms-production.imgix.net/2024-09/Moscow-Red-Square-9a8e66e06b49.jpg?fit=crop&w=3840&auto=format&q=75",
        ]),
        logo: Some("https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcS0782xqRYhnlv3l9GSUSEUuLqp2A82aarEOQ&s".into()),
    }
}

fn omsk() -> Marathon {
    Marathon {
        token: "omsk".into(),
        name: "Омский марафон (Сибирский международный)".into(),
        date: date(2025, 8, 24),
        location: "Омск, Россия".into(),
        distance: FULL_MARATHON.into(),
        description: "Омский марафон – международное событие, привлекающее бегунов со всего мира, проходящее по живописному маршруту города.".into(),
        details: details(&[
            ("Трассы", "Улицы Омска, парки"),
            ("Дистанции", "Полумарафон, марафон"),
            ("Рекорды", "Мужчины: 2:20:00, Женщины: 2:40:00"),
            ("Количество участников", "Около 15 000"),
            ("Как добраться", "Автобусы, такси, электричка"),
        ]),
        accommodations: vec![
            lodging("Отель Омск Центр", 0.4, "средний", [73.3686, 54.9893], "ул. Ленина, 5", "https://omskcenterhotel.ru"),
            lodging("Гостиница Сибирь", 0.7, "премиум", [73.3700, 54.9900], "ул. Фрунзе, 20", "https://siberiahotel.ru"),
            lodging("Отель Сибирь", 1.0, "средний", [73.3720, 54.9870], "ул. Карла Маркса, 15", "https://siberiahotel.ru"),
            lodging("Гостиница Заря", 1.2, "эконом", [73.3750, 54.9850], "ул. Победы, 10", "https://zaryahotel.ru"),
            lodging("Отель Виктория", 0.8, "средний", [73.3740, 54.9860], "ул. Комсомольская, 8", "https://victoriahotel.ru"),
        ],
        restaurants: vec![
            lodging("Ресторан Сибирь", 0.7, "средний", [73.3700, 54.9900], "ул. Фрунзе, 25", "https://sibrestaurant.ru"),
            lodging("Кафе Омск", 0.5, "эконом", [73.3680, 54.9880], "ул. Ленина, 10", "https://omskcafe.ru"),
            lodging("Гастроном Омска", 1.0, "премиум", [73.3720, 54.9870], "ул. Ленина, 15", "https://gastronomyomsk.ru"),
            lodging("Кафе Ласточка", 0.8, "средний", [73.3740, 54.9860], "ул. Карла Маркса, 8", "https://lastochkacafe.ru"),
            lodging("Ресторан Омский Уют", 0.6, "средний", [73.3750, 54.9850], "ул. Победы, 12", "https://omskuiut.ru"),
        ],
        attractions: vec![
            attraction("Омский художественный музей", "Известный музей Омска.", [73.3680, 54.9880], "ул. Ленина, 3", "https://omskartmuseum.ru"),
            attraction("Старый город", "Историческая часть города.", [73.3670, 54.9870], "ул. Победы, 1", "https://omskoldtown.ru"),
            attraction("Парк Победы", "Большой парк для отдыха.", [73.3690, 54.9860], "ул. Карла Маркса, 12", "https://victoryparkomsk.ru"),
            attraction("Омская крепость", "Историческая крепость Омска.", [73.3710, 54.9900], "ул. Фрунзе, 30", "https://omskfortress.ru"),
            attraction("Омский театр драмы", "Красивый театр с богатой историей.", [73.3730, 54.9880], "ул. Карла Либкнехта, 20", "https://omskdramatheatre.ru"),
        ],
        map_center: Coordinates::new(73.3686, 54.9893),
        images: strings(&[
            "https://img-fotki.yandex.ru/get/6104/30348152.124/0_600ee_429abb88_orig",
            "https://img.geliophoto.com/omsk2020/04_omsk2020.jpg",
            "https://apelsin-tur.ru/wp-content/uploads/2021/02/omsk-lyubinsky-prospekt.jpg",
            "https://click-or-die.ru/app/uploads/2017/08/Omsk.-Rechnoy-vokzal.jpg",
        ]),
        logo: Some("https://img.geliophoto.com/omsk2020/04_omsk2020.jpg".into()),
    }
}

fn saint_petersburg() -> Marathon {
    Marathon {
        token: "saint-petersburg".into(),
        name: "Санкт-Петербургский марафон".into(),
        date: date(2025, 8, 17),
        location: "Санкт-Петербург, Россия".into(),
        distance: FULL_MARATHON.into(),
        description: "Санкт-Петербургский марафон проходит по улицам культурной столицы, демонстрируя историческую архитектуру и живописные виды. Участники бегут по маршруту, который объединяет классические и современные локации города.".into(),
        details: details(&[
            ("Трассы", "Реки, мосты, исторические улицы"),
            ("Дистанции", "5 км, 10 км, полумарафон, марафон"),
            ("Рекорды", "Мужчины: 2:12:00, Женщины: 2:32:00"),
            ("Количество участников", "Более 25 000"),
            ("Как добраться", "Метро, автобусы, такси"),
        ]),
        accommodations: vec![
            lodging("Отель Петербург", 0.6, "средний", [30.3470, 59.9325], "Невский проспект, 12", "https://peterhotel.ru"),
            lodging("Гостиница Дворцовая", 1.0, "премиум", [30.3150, 59.9400], "Дворцовая площадь, 5", "https://palacehotel.ru"),
            lodging("Отель Спутник", 0.8, "средний", [30.3600, 59.9390], "ул. Литейный, 20", "https://sputnikhotel.ru"),
            lodging("Гостиница Россия", 1.2, "эконом", [30.3200, 59.9270], "ул. Гороховая, 8", "https://russiahotel.ru"),
            lodging("Отель Ривьера", 0.5, "средний", [30.3100, 59.9350], "ул. Малая Морская, 10", "https://rivierahotel.ru"),
        ],
        restaurants: vec![
            lodging("Кафе Пушкин", 0.8, "средний", [30.3141, 59.9386], "ул. Невский, 18", "https://pushkincafe.ru"),
            lodging("Ресторан Дворцовая", 0.5, "премиум", [30.3200, 59.9350], "ул. Миллионная, 2", "https://palacerestaurant.ru"),
            lodging("Уютное кафе", 1.0, "эконом", [30.3250, 59.9330], "ул. Фонтанки, 15", "https://cosycafe.ru"),
            lodging("Ресторан Северная звезда", 0.7, "средний", [30.3300, 59.9340], "ул. Гороховая, 12", "https://northstarrestaurant.ru"),
            lodging("Кафе Гавань", 0.9, "средний", [30.3150, 59.9370], "ул. Морская, 8", "https://harborcafe.ru"),
        ],
        attractions: vec![
            attraction("Дворцовая площадь", "Главная площадь Санкт-Петербурга.", [30.3146, 59.9398], "Дворцовая площадь", "https://palacesquare.ru"),
            attraction("Эрмитаж", "Один из крупнейших музеев мира.", [30.3130, 59.9405], "Дворцовая набережная, 34", "https://hermitage.ru"),
            attraction("Невский проспект", "Знаменитая улица с исторической архитектурой.", [30.3558, 59.9311], "Невский проспект", "https://nevsky.ru"),
            attraction("Исаакиевский собор", "Крупный собор в центре города.", [30.3060, 59.9343], "Исаакиевская площадь, 4", "https://isaacscathedral.ru"),
            attraction("Мариинский театр", "Один из самых известных театров.", [30.2960, 59.9256], "Театральная площадь, 1", "https://mariinsky.ru"),
        ],
        map_center: Coordinates::new(30.3609, 59.9311),
        images: strings(&[
            "https://sokroma.ru/upload/resize_cache/webp/iblock/a32/8kwc1yej314rkkzlslt614nsrwk8iwrp.webp",
            "https://cdn.tripster.ru/thumbs2/46a99286-aab0-11ef-a1a7-72c411f6db16.1220x600.jpeg",
            "https://cdn2.tu-tu.ru/image/pagetree_node_data/1/d54c7a90618dad430f90f15b1092d902/",
        ]),
        logo: Some("https://ss.sport-express.ru/userfiles/materials/196/1968477/volga.jpg".into()),
    }
}

fn kazan() -> Marathon {
    Marathon {
        token: "kazan".into(),
        name: "Казанский марафон".into(),
        date: date(2025, 5, 12),
        location: "Казань, Россия".into(),
        distance: FULL_MARATHON.into(),
        description: "Казанский марафон проходит в центре Казани, охватывая исторические места города, включая знаменитый Кремль. Это событие ежегодно привлекает тысячи участников.".into(),
        details: details(&[
            ("Трассы", "Исторические улицы, парки"),
            ("Дистанции", "5 км, 10 км, полумарафон, марафон"),
            ("Рекорды", "Мужчины: 2:14:00, Женщины: 2:33:00"),
            ("Количество участников", "Более 15 000"),
            ("Как добраться", "Метро, автобусы, такси"),
        ]),
        accommodations: vec![
            lodging("Отель Казань Центр", 0.5, "средний", [49.1221, 55.7887], "ул. Баумана, 5", "https://kazancenterhotel.ru"),
            lodging("Гостиница Кремль", 0.7, "премиум", [49.1240, 55.7890], "ул. Кремлевская, 12", "https://kazan-kremlin.ru"),
            lodging("Отель Татарстан", 1.2, "эконом", [49.1220, 55.7910], "ул. Татарстанская, 8", "https://tatarthotel.ru"),
            lodging("Гранд Отель Казань", 1.0, "средний", [49.1190, 55.7880], "ул. Петербургская, 35", "https://grandkazan.ru"),
            lodging("Отель Мираж", 0.9, "премиум", [49.1250, 55.7920], "ул. Ямашева, 3", "https://miragehotel.ru"),
        ],
        restaurants: vec![
            lodging("Ресторан Тюбетей", 0.8, "средний", [49.1200, 55.7900], "ул. Баумана, 10", "https://tubetei.ru"),
            lodging("Кафе Кремль", 0.6, "эконом", [49.1240, 55.7890], "ул. Кремлевская, 15", "https://kremlcafe.ru"),
            lodging("Гастроном Татарии", 1.0, "премиум", [49.1220, 55.7910], "ул. Татарстанская, 4", "https://tatarcuisine.ru"),
            lodging("Кафе Чак-чак", 0.9, "средний", [49.1190, 55.7880], "ул. Петербургская, 22", "https://chakchakcafe.ru"),
            lodging("Ресторан Волга", 1.1, "средний", [49.1250, 55.7920], "ул. Кремлевская, 19", "https://volgarest.ru"),
        ],
        attractions: vec![
            attraction("Казанский Кремль", "Историческая крепость Казани.", [49.1239, 55.7972], "ул. Кремлевская, 1", "https://kazankremlin.ru"),
            attraction("Мечеть Кул Шариф", "Знаменитая мечеть в Кремле.", [49.1245, 55.7981], "ул. Кремлевская, 2", "https://kulsharif.ru"),
            attraction("Улица Баумана", "Пешеходная улица с кафе и магазинами.", [49.1221, 55.7887], "ул. Баумана", "https://baumana.ru"),
            attraction("Центр семьи Казан", "Здание в виде чаша, с видом на Волгу.", [49.1068, 55.8304], "ул. Сибгата Хакима, 4", "https://kazanfamilycenter.ru"),
            attraction("Парк Черное озеро", "Зеленый парк для прогулок.", [49.1225, 55.7875], "ул. Лобачевского, 12", "https://blacklakepark.ru"),
        ],
        map_center: Coordinates::new(49.1221, 55.7887),
        images: strings(&[
            "https://kuda-kazan.ru/uploads/e413f03713d1a6eebf20c7bc7ccd9816.jpg",
            "https://kuda-kazan.ru/uploads/7f1cb0741d05ff952d46f06a1c635310.jpg",
            "https://7d9e88a8-f178-4098-bea5-48d960920605.selcdn.net/f03d4b3c-9615-48fd-affd-ed5ad2731a6a/-/format/auto/-/quality/smart_retina/-/stretch/off/-/resize/1900x/",
            "https://dynamic-media-cdn.tripadvisor.com/media/photo-o/15/4d/45/da/kazan.jpg?w=1200&h=700&s=1",
        ]),
        logo: Some("https://img.geliophoto.com/kazan/00_kazan.jpg".into()),
    }
}

fn sochi() -> Marathon {
    Marathon {
        token: "sochi".into(),
        name: "Сочинский марафон".into(),
        date: date(2025, 9, 15),
        location: "Сочи, Россия".into(),
        distance: FULL_MARATHON.into(),
        description: "Сочинский марафон проходит вдоль Черного моря, обеспечивая потрясающие виды. Забег включает пляжные улицы и центральные районы города.".into(),
        details: details(&[
            ("Трассы", "Пляжные дороги, центральные улицы"),
            ("Дистанции", "5 км, 10 км, полумарафон, марафон"),
            ("Рекорды", "Мужчины: 2:16:00, Женщины: 2:36:00"),
            ("Количество участников", "Более 20 000"),
            ("Как добраться", "Автобусы, такси, электробусы"),
        ]),
        accommodations: vec![
            lodging("Отель Сочи Центр", 0.7, "средний", [39.7200, 43.5850], "ул. Курортный проспект, 15", "https://sochicenterhotel.ru"),
            lodging("Гостиница Олимпийская", 1.0, "премиум", [39.9550, 43.4050], "ул. Олимпийская, 22", "https://olympicsochi.ru"),
            lodging("Отель Звезда", 0.6, "эконом", [39.7100, 43.5800], "ул. Ленина, 10", "https://zvezdahotel.ru"),
            lodging("Гранд Отель Сочи", 1.1, "премиум", [39.7250, 43.5750], "ул. Победы, 8", "https://grandsochi.ru"),
            lodging("Отель Морской", 0.8, "средний", [39.7300, 43.5700], "ул. Морская, 20", "https://morskoihotel.ru"),
        ],
        restaurants: vec![
            lodging("Ресторан Черноморье", 1.2, "средний", [39.7130, 43.6020], "ул. Морская, 14", "https://chernomorierest.ru"),
            lodging("Кафе Пляж", 1.0, "эконом", [39.7150, 43.6000], "ул. Победы, 6", "https://beachcafe.ru"),
            lodging("Гастроном Сочи", 1.3, "премиум", [39.7100, 43.6030], "ул. Ленина, 12", "https://sochigastronomy.ru"),
            lodging("Ресторан Ривьера", 0.9, "средний", [39.7120, 43.6010], "ул. Ривьера, 4", "https://rivierarest.ru"),
            lodging("Кафе Олимпия", 1.1, "средний", [39.7140, 43.5990], "ул. Олимпийская, 18", "https://olympiacafe.ru"),
        ],
        attractions: vec![
            attraction("Парк Ривьера", "Популярный парк для отдыха.", [39.7250, 43.5900], "ул. Ривьера, 1", "https://riviera.ru"),
            attraction("Сочинский дендрарий", "Ботанический сад с уникальными растениями.", [39.7400, 43.5730], "ул. Курортный пр., 74", "https://sochidendr.ru"),
            attraction("Зимний театр", "Театр в центре города.", [39.7280, 43.5735], "ул. Театральная, 2", "https://wintertheater.ru"),
            attraction("Морской порт Сочи", "Главный порт города.", [39.7200, 43.5780], "ул. Морской, 2", "https://sochiport.ru"),
            attraction("Олимпийский парк", "Комплекс сооружений Олимпиады.", [39.9550, 43.4020], "ул. Олимпийская, 1", "https://olympicsochi.ru"),
        ],
        map_center: Coordinates::new(39.7138, 43.6026),
        images: strings(&[
            "https://7d9e88a8-f178-4098-bea5-48d960920605.selcdn.net/493da04c-3a2b-402d-8557-a90f3f4b867b/-/format/auto/-/quality/smart_retina/-/stretch/off/-/resize/1900x/",
            "https://sochi.ru/upload/medialibrary/347/34788aa79c16c18530b1d98ad51b1dc1.jpg",
            "https://ridertrip.ru/wp-content/uploads/2020/08/dji_0133.jpg",
        ]),
        logo: Some("https://cdn2.rsttur.ru/file/1593226557LKlD2.webp".into()),
    }
}

fn vladivostok() -> Marathon {
    Marathon {
        token: "vladivostok".into(),
        name: "Владивостокский марафон".into(),
        date: date(2025, 10, 3),
        location: "Владивосток, Россия".into(),
        distance: FULL_MARATHON.into(),
        description: "Владивостокский марафон проходит вдоль живописного залива, соединяя современные улицы города с историческими местами. Это уникальное событие привлекает бегунов со всего мира.".into(),
        details: details(&[
            ("Трассы", "Прибрежные дороги, мосты, исторические улицы"),
            ("Дистанции", "5 км, 10 км, полумарафон, марафон"),
            ("Рекорды", "Мужчины: 2:18:00, Женщины: 2:38:00"),
            ("Количество участников", "Более 12 000"),
            ("Как добраться", "Автобусы, такси, электричка"),
        ]),
        accommodations: vec![
            lodging("Отель Владивосток Центр", 0.6, "средний", [131.8850, 43.1150], "ул. Светланская, 10", "https://vladcenterhotel.ru"),
            lodging("Гостиница Приморье", 1.0, "премиум", [131.8860, 43.1160], "ул. Океанский проспект, 20", "https://primoryehotel.ru"),
            lodging("Отель Амурский залив", 0.8, "эконом", [131.8840, 43.1130], "ул. Калинина, 5", "https://amurbayhotel.ru"),
            lodging("Гранд Отель Владивосток", 1.2, "премиум", [131.8870, 43.1170], "ул. Алеутская, 22", "https://grandvladivostok.ru"),
            lodging("Отель Тихий Океан", 0.9, "средний", [131.8830, 43.1140], "ул. Набережная, 15", "https://pacifichotel.ru"),
        ],
        restaurants: vec![
            lodging("Ресторан Океан", 1.3, "средний", [131.8860, 43.1155], "ул. Океанский проспект, 12", "https://oceanrest.ru"),
            lodging("Кафе Приморье", 1.0, "эконом", [131.8880, 43.1145], "ул. Светланская, 8", "https://primcafes.ru"),
            lodging("Гастроном Владивостока", 1.2, "премиум", [131.8900, 43.1160], "ул. Алеутская, 25", "https://vladgastronomy.ru"),
            lodging("Ресторан Золотой Рог", 0.9, "средний", [131.8840, 43.1130], "ул. Набережная, 5", "https://goldenhornrest.ru"),
            lodging("Кафе Тихий Океан", 1.1, "средний", [131.8820, 43.1120], "ул. Калинина, 18", "https://pacificcafe.ru"),
        ],
        attractions: vec![
            attraction("Золотой мост", "Висячий мост через бухту Золотой Рог.", [131.8860, 43.1155], "ул. Набережная, 1", "https://goldenbridge.ru"),
            attraction("Русский остров", "Живописный остров в заливе Петра Великого.", [131.7280, 42.9690], "Русский остров", "https://russkyisland.ru"),
            attraction("Владивостокская крепость", "Историческая оборонительная крепость.", [131.8735, 43.1050], "ул. Фортовая, 3", "https://vladfortress.ru"),
            attraction("Набережная Спортивная", "Популярное место для прогулок и отдыха.", [131.8850, 43.1160], "ул. Набережная, 7", "https://sportembankment.ru"),
            attraction("Маяк Токаревского", "Один из самых известных маяков России.", [131.8650, 43.0980], "Маяк Токаревского", "https://tokarevskylighthouse.ru"),
        ],
        map_center: Coordinates::new(131.8853, 43.1155),
        images: strings(&[
            "https://cdn.forumvostok.ru/upload/medialibrary/d09/d09a266b52d7ebac0915f0f395b7ae64.jpg?1578905562337416",
            "https://breeze.ru/files/images/port_vladivostok_0.jpg",
            "https://cdn.iz.ru/sites/default/files/styles/1065xh/public/photo_item-2022-06/1.jpg?itok=inpDBYqp",
        ]),
        logo: Some("https://cdn.forumvostok.ru/upload/medialibrary/d09/d09a266b52d7ebac0915f0f395b7ae64.jpg?1578905562337416".into()),
    }
}
