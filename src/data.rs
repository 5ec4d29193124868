// emoji-codes Built-in Shortcode Data
// Embedded `en` table and global alias pairs, compiled into the binary

/// Canonical `en` shortcode table as (name, sequence) pairs.
///
/// Names carry the canonical `:` delimiter with words joined by `_`, exactly
/// as they are stored in the language table. Sequences are unique within
/// this table, so the decode direction is a bijection.
pub const EMOJI_EN: &[(&str, &str)] = &[
    // Smileys & emotion
    (":grinning_face:", "\u{1F600}"),
    (":grinning_face_with_big_eyes:", "\u{1F603}"),
    (":grinning_face_with_smiling_eyes:", "\u{1F604}"),
    (":beaming_face_with_smiling_eyes:", "\u{1F601}"),
    (":grinning_squinting_face:", "\u{1F606}"),
    (":grinning_face_with_sweat:", "\u{1F605}"),
    (":rolling_on_the_floor_laughing:", "\u{1F923}"),
    (":face_with_tears_of_joy:", "\u{1F602}"),
    (":slightly_smiling_face:", "\u{1F642}"),
    (":upside-down_face:", "\u{1F643}"),
    (":winking_face:", "\u{1F609}"),
    (":smiling_face_with_smiling_eyes:", "\u{1F60A}"),
    (":smiling_face_with_halo:", "\u{1F607}"),
    (":smiling_face_with_hearts:", "\u{1F970}"),
    (":smiling_face_with_heart-eyes:", "\u{1F60D}"),
    (":star-struck:", "\u{1F929}"),
    (":face_blowing_a_kiss:", "\u{1F618}"),
    (":kissing_face:", "\u{1F617}"),
    (":smiling_face:", "\u{263A}"),
    (":kissing_face_with_closed_eyes:", "\u{1F61A}"),
    (":kissing_face_with_smiling_eyes:", "\u{1F619}"),
    (":face_savoring_food:", "\u{1F60B}"),
    (":face_with_tongue:", "\u{1F61B}"),
    (":winking_face_with_tongue:", "\u{1F61C}"),
    (":zany_face:", "\u{1F92A}"),
    (":squinting_face_with_tongue:", "\u{1F61D}"),
    (":money-mouth_face:", "\u{1F911}"),
    (":hugging_face:", "\u{1F917}"),
    (":face_with_hand_over_mouth:", "\u{1F92D}"),
    (":shushing_face:", "\u{1F92B}"),
    (":thinking_face:", "\u{1F914}"),
    (":zipper-mouth_face:", "\u{1F910}"),
    (":face_with_raised_eyebrow:", "\u{1F928}"),
    (":neutral_face:", "\u{1F610}"),
    (":expressionless_face:", "\u{1F611}"),
    (":face_without_mouth:", "\u{1F636}"),
    (":smirking_face:", "\u{1F60F}"),
    (":unamused_face:", "\u{1F612}"),
    (":face_with_rolling_eyes:", "\u{1F644}"),
    (":grimacing_face:", "\u{1F62C}"),
    (":lying_face:", "\u{1F925}"),
    (":relieved_face:", "\u{1F60C}"),
    (":pensive_face:", "\u{1F614}"),
    (":sleepy_face:", "\u{1F62A}"),
    (":drooling_face:", "\u{1F924}"),
    (":sleeping_face:", "\u{1F634}"),
    (":face_with_medical_mask:", "\u{1F637}"),
    (":face_with_thermometer:", "\u{1F912}"),
    (":face_with_head-bandage:", "\u{1F915}"),
    (":nauseated_face:", "\u{1F922}"),
    (":face_vomiting:", "\u{1F92E}"),
    (":sneezing_face:", "\u{1F927}"),
    (":hot_face:", "\u{1F975}"),
    (":cold_face:", "\u{1F976}"),
    (":woozy_face:", "\u{1F974}"),
    (":dizzy_face:", "\u{1F635}"),
    (":exploding_head:", "\u{1F92F}"),
    (":cowboy_hat_face:", "\u{1F920}"),
    (":partying_face:", "\u{1F973}"),
    (":smiling_face_with_sunglasses:", "\u{1F60E}"),
    (":nerd_face:", "\u{1F913}"),
    (":face_with_monocle:", "\u{1F9D0}"),
    (":confused_face:", "\u{1F615}"),
    (":worried_face:", "\u{1F61F}"),
    (":slightly_frowning_face:", "\u{1F641}"),
    (":frowning_face:", "\u{2639}"),
    (":face_with_open_mouth:", "\u{1F62E}"),
    (":hushed_face:", "\u{1F62F}"),
    (":astonished_face:", "\u{1F632}"),
    (":flushed_face:", "\u{1F633}"),
    (":pleading_face:", "\u{1F97A}"),
    (":frowning_face_with_open_mouth:", "\u{1F626}"),
    (":anguished_face:", "\u{1F627}"),
    (":fearful_face:", "\u{1F628}"),
    (":anxious_face_with_sweat:", "\u{1F630}"),
    (":sad_but_relieved_face:", "\u{1F625}"),
    (":crying_face:", "\u{1F622}"),
    (":loudly_crying_face:", "\u{1F62D}"),
    (":face_screaming_in_fear:", "\u{1F631}"),
    (":confounded_face:", "\u{1F616}"),
    (":persevering_face:", "\u{1F623}"),
    (":disappointed_face:", "\u{1F61E}"),
    (":downcast_face_with_sweat:", "\u{1F613}"),
    (":weary_face:", "\u{1F629}"),
    (":tired_face:", "\u{1F62B}"),
    (":yawning_face:", "\u{1F971}"),
    (":face_with_steam_from_nose:", "\u{1F624}"),
    (":pouting_face:", "\u{1F621}"),
    (":angry_face:", "\u{1F620}"),
    (":face_with_symbols_on_mouth:", "\u{1F92C}"),
    (":smiling_face_with_horns:", "\u{1F608}"),
    (":angry_face_with_horns:", "\u{1F47F}"),
    (":skull:", "\u{1F480}"),
    (":skull_and_crossbones:", "\u{2620}"),
    (":pile_of_poo:", "\u{1F4A9}"),
    (":clown_face:", "\u{1F921}"),
    (":ogre:", "\u{1F479}"),
    (":goblin:", "\u{1F47A}"),
    (":ghost:", "\u{1F47B}"),
    (":alien:", "\u{1F47D}"),
    (":alien_monster:", "\u{1F47E}"),
    (":robot:", "\u{1F916}"),
    (":grinning_cat:", "\u{1F63A}"),
    (":grinning_cat_with_smiling_eyes:", "\u{1F638}"),
    (":cat_with_tears_of_joy:", "\u{1F639}"),
    (":smiling_cat_with_heart-eyes:", "\u{1F63B}"),
    (":cat_with_wry_smile:", "\u{1F63C}"),
    (":kissing_cat:", "\u{1F63D}"),
    (":weary_cat:", "\u{1F640}"),
    (":crying_cat:", "\u{1F63F}"),
    (":pouting_cat:", "\u{1F63E}"),
    (":see-no-evil_monkey:", "\u{1F648}"),
    (":hear-no-evil_monkey:", "\u{1F649}"),
    (":speak-no-evil_monkey:", "\u{1F64A}"),
    // Hearts & emotion marks
    (":kiss_mark:", "\u{1F48B}"),
    (":love_letter:", "\u{1F48C}"),
    (":heart_with_arrow:", "\u{1F498}"),
    (":heart_with_ribbon:", "\u{1F49D}"),
    (":sparkling_heart:", "\u{1F496}"),
    (":growing_heart:", "\u{1F497}"),
    (":beating_heart:", "\u{1F493}"),
    (":revolving_hearts:", "\u{1F49E}"),
    (":two_hearts:", "\u{1F495}"),
    (":heart_decoration:", "\u{1F49F}"),
    (":heart_exclamation:", "\u{2763}"),
    (":broken_heart:", "\u{1F494}"),
    (":red_heart:", "\u{2764}"),
    (":heart_on_fire:", "\u{2764}\u{FE0F}\u{200D}\u{1F525}"),
    (":mending_heart:", "\u{2764}\u{FE0F}\u{200D}\u{1FA79}"),
    (":orange_heart:", "\u{1F9E1}"),
    (":yellow_heart:", "\u{1F49B}"),
    (":green_heart:", "\u{1F49A}"),
    (":blue_heart:", "\u{1F499}"),
    (":purple_heart:", "\u{1F49C}"),
    (":brown_heart:", "\u{1F90E}"),
    (":black_heart:", "\u{1F5A4}"),
    (":white_heart:", "\u{1F90D}"),
    (":hundred_points:", "\u{1F4AF}"),
    (":anger_symbol:", "\u{1F4A2}"),
    (":collision:", "\u{1F4A5}"),
    (":dizzy:", "\u{1F4AB}"),
    (":sweat_droplets:", "\u{1F4A6}"),
    (":dashing_away:", "\u{1F4A8}"),
    (":bomb:", "\u{1F4A3}"),
    (":speech_balloon:", "\u{1F4AC}"),
    (":eye_in_speech_bubble:", "\u{1F441}\u{FE0F}\u{200D}\u{1F5E8}\u{FE0F}"),
    (":thought_balloon:", "\u{1F4AD}"),
    (":zzz:", "\u{1F4A4}"),
    // Hands & body
    (":waving_hand:", "\u{1F44B}"),
    (":raised_back_of_hand:", "\u{1F91A}"),
    (":hand_with_fingers_splayed:", "\u{1F590}"),
    (":raised_hand:", "\u{270B}"),
    (":vulcan_salute:", "\u{1F596}"),
    (":OK_hand:", "\u{1F44C}"),
    (":pinching_hand:", "\u{1F90F}"),
    (":victory_hand:", "\u{270C}"),
    (":crossed_fingers:", "\u{1F91E}"),
    (":love-you_gesture:", "\u{1F91F}"),
    (":sign_of_the_horns:", "\u{1F918}"),
    (":call_me_hand:", "\u{1F919}"),
    (":backhand_index_pointing_left:", "\u{1F448}"),
    (":backhand_index_pointing_right:", "\u{1F449}"),
    (":backhand_index_pointing_up:", "\u{1F446}"),
    (":backhand_index_pointing_down:", "\u{1F447}"),
    (":middle_finger:", "\u{1F595}"),
    (":index_pointing_up:", "\u{261D}"),
    (":thumbs_up:", "\u{1F44D}"),
    (":thumbs_up_light_skin_tone:", "\u{1F44D}\u{1F3FB}"),
    (":thumbs_up_medium-dark_skin_tone:", "\u{1F44D}\u{1F3FE}"),
    (":thumbs_up_dark_skin_tone:", "\u{1F44D}\u{1F3FF}"),
    (":thumbs_down:", "\u{1F44E}"),
    (":raised_fist:", "\u{270A}"),
    (":oncoming_fist:", "\u{1F44A}"),
    (":left-facing_fist:", "\u{1F91B}"),
    (":right-facing_fist:", "\u{1F91C}"),
    (":clapping_hands:", "\u{1F44F}"),
    (":raising_hands:", "\u{1F64C}"),
    (":open_hands:", "\u{1F450}"),
    (":palms_up_together:", "\u{1F932}"),
    (":handshake:", "\u{1F91D}"),
    (":folded_hands:", "\u{1F64F}"),
    (":writing_hand:", "\u{270D}"),
    (":nail_polish:", "\u{1F485}"),
    (":selfie:", "\u{1F933}"),
    (":flexed_biceps:", "\u{1F4AA}"),
    (":ear:", "\u{1F442}"),
    (":nose:", "\u{1F443}"),
    (":brain:", "\u{1F9E0}"),
    (":eyes:", "\u{1F440}"),
    (":eye:", "\u{1F441}"),
    (":tongue:", "\u{1F445}"),
    (":mouth:", "\u{1F444}"),
    // People
    (":baby:", "\u{1F476}"),
    (":child:", "\u{1F9D2}"),
    (":boy:", "\u{1F466}"),
    (":girl:", "\u{1F467}"),
    (":person:", "\u{1F9D1}"),
    (":man:", "\u{1F468}"),
    (":woman:", "\u{1F469}"),
    (":older_person:", "\u{1F9D3}"),
    (":old_man:", "\u{1F474}"),
    (":old_woman:", "\u{1F475}"),
    (":police_officer:", "\u{1F46E}"),
    (":detective:", "\u{1F575}"),
    (":guard:", "\u{1F482}"),
    (":construction_worker:", "\u{1F477}"),
    (":prince:", "\u{1F934}"),
    (":princess:", "\u{1F478}"),
    (":person_wearing_turban:", "\u{1F473}"),
    (":bride_with_veil:", "\u{1F470}"),
    (":pregnant_woman:", "\u{1F930}"),
    (":baby_angel:", "\u{1F47C}"),
    (":Santa_Claus:", "\u{1F385}"),
    (":Mrs._Claus:", "\u{1F936}"),
    (":superhero:", "\u{1F9B8}"),
    (":supervillain:", "\u{1F9B9}"),
    (":mage:", "\u{1F9D9}"),
    (":fairy:", "\u{1F9DA}"),
    (":vampire:", "\u{1F9DB}"),
    (":man_technologist:", "\u{1F468}\u{200D}\u{1F4BB}"),
    (":woman_technologist:", "\u{1F469}\u{200D}\u{1F4BB}"),
    (":man_scientist:", "\u{1F468}\u{200D}\u{1F52C}"),
    (":woman_scientist:", "\u{1F469}\u{200D}\u{1F52C}"),
    (":person_walking:", "\u{1F6B6}"),
    (":person_running:", "\u{1F3C3}"),
    (":people_holding_hands:", "\u{1F9D1}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}"),
    (":couple_with_heart_woman_man:", "\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F468}"),
    (":kiss_woman_man:", "\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F468}"),
    (":family_man_woman_boy:", "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}"),
    // Animals & nature
    (":dog_face:", "\u{1F436}"),
    (":dog:", "\u{1F415}"),
    (":guide_dog:", "\u{1F9AE}"),
    (":service_dog:", "\u{1F415}\u{200D}\u{1F9BA}"),
    (":wolf:", "\u{1F43A}"),
    (":fox:", "\u{1F98A}"),
    (":cat_face:", "\u{1F431}"),
    (":cat:", "\u{1F408}"),
    (":lion:", "\u{1F981}"),
    (":tiger_face:", "\u{1F42F}"),
    (":horse_face:", "\u{1F434}"),
    (":horse:", "\u{1F40E}"),
    (":unicorn:", "\u{1F984}"),
    (":zebra:", "\u{1F993}"),
    (":cow_face:", "\u{1F42E}"),
    (":ox:", "\u{1F402}"),
    (":pig_face:", "\u{1F437}"),
    (":boar:", "\u{1F417}"),
    (":ram:", "\u{1F40F}"),
    (":ewe:", "\u{1F411}"),
    (":goat:", "\u{1F410}"),
    (":camel:", "\u{1F42A}"),
    (":llama:", "\u{1F999}"),
    (":giraffe:", "\u{1F992}"),
    (":elephant:", "\u{1F418}"),
    (":rhinoceros:", "\u{1F98F}"),
    (":mouse_face:", "\u{1F42D}"),
    (":rat:", "\u{1F400}"),
    (":hamster:", "\u{1F439}"),
    (":rabbit_face:", "\u{1F430}"),
    (":chipmunk:", "\u{1F43F}"),
    (":hedgehog:", "\u{1F994}"),
    (":bat:", "\u{1F987}"),
    (":bear:", "\u{1F43B}"),
    (":polar_bear:", "\u{1F43B}\u{200D}\u{2744}\u{FE0F}"),
    (":koala:", "\u{1F428}"),
    (":panda:", "\u{1F43C}"),
    (":sloth:", "\u{1F9A5}"),
    (":otter:", "\u{1F9A6}"),
    (":kangaroo:", "\u{1F998}"),
    (":turkey:", "\u{1F983}"),
    (":chicken:", "\u{1F414}"),
    (":rooster:", "\u{1F413}"),
    (":hatching_chick:", "\u{1F423}"),
    (":baby_chick:", "\u{1F424}"),
    (":bird:", "\u{1F426}"),
    (":penguin:", "\u{1F427}"),
    (":dove:", "\u{1F54A}"),
    (":eagle:", "\u{1F985}"),
    (":duck:", "\u{1F986}"),
    (":swan:", "\u{1F9A2}"),
    (":owl:", "\u{1F989}"),
    (":flamingo:", "\u{1F9A9}"),
    (":peacock:", "\u{1F99A}"),
    (":parrot:", "\u{1F99C}"),
    (":frog:", "\u{1F438}"),
    (":crocodile:", "\u{1F40A}"),
    (":turtle:", "\u{1F422}"),
    (":lizard:", "\u{1F98E}"),
    (":snake:", "\u{1F40D}"),
    (":dragon_face:", "\u{1F432}"),
    (":dragon:", "\u{1F409}"),
    (":sauropod:", "\u{1F995}"),
    (":T-Rex:", "\u{1F996}"),
    (":spouting_whale:", "\u{1F433}"),
    (":whale:", "\u{1F40B}"),
    (":dolphin:", "\u{1F42C}"),
    (":fish:", "\u{1F41F}"),
    (":tropical_fish:", "\u{1F420}"),
    (":blowfish:", "\u{1F421}"),
    (":shark:", "\u{1F988}"),
    (":octopus:", "\u{1F419}"),
    (":spiral_shell:", "\u{1F41A}"),
    (":snail:", "\u{1F40C}"),
    (":butterfly:", "\u{1F98B}"),
    (":bug:", "\u{1F41B}"),
    (":ant:", "\u{1F41C}"),
    (":honeybee:", "\u{1F41D}"),
    (":lady_beetle:", "\u{1F41E}"),
    (":cricket:", "\u{1F997}"),
    (":spider:", "\u{1F577}"),
    (":spider_web:", "\u{1F578}"),
    (":scorpion:", "\u{1F982}"),
    // Plants
    (":bouquet:", "\u{1F490}"),
    (":cherry_blossom:", "\u{1F338}"),
    (":white_flower:", "\u{1F4AE}"),
    (":rosette:", "\u{1F3F5}"),
    (":rose:", "\u{1F339}"),
    (":wilted_flower:", "\u{1F940}"),
    (":hibiscus:", "\u{1F33A}"),
    (":sunflower:", "\u{1F33B}"),
    (":blossom:", "\u{1F33C}"),
    (":tulip:", "\u{1F337}"),
    (":seedling:", "\u{1F331}"),
    (":evergreen_tree:", "\u{1F332}"),
    (":deciduous_tree:", "\u{1F333}"),
    (":palm_tree:", "\u{1F334}"),
    (":cactus:", "\u{1F335}"),
    (":sheaf_of_rice:", "\u{1F33E}"),
    (":herb:", "\u{1F33F}"),
    (":shamrock:", "\u{2618}"),
    (":four_leaf_clover:", "\u{1F340}"),
    (":maple_leaf:", "\u{1F341}"),
    (":fallen_leaf:", "\u{1F342}"),
    (":leaf_fluttering_in_wind:", "\u{1F343}"),
    // Food & drink
    (":grapes:", "\u{1F347}"),
    (":melon:", "\u{1F348}"),
    (":watermelon:", "\u{1F349}"),
    (":tangerine:", "\u{1F34A}"),
    (":lemon:", "\u{1F34B}"),
    (":banana:", "\u{1F34C}"),
    (":pineapple:", "\u{1F34D}"),
    (":mango:", "\u{1F96D}"),
    (":red_apple:", "\u{1F34E}"),
    (":green_apple:", "\u{1F34F}"),
    (":pear:", "\u{1F350}"),
    (":peach:", "\u{1F351}"),
    (":cherries:", "\u{1F352}"),
    (":strawberry:", "\u{1F353}"),
    (":kiwi_fruit:", "\u{1F95D}"),
    (":tomato:", "\u{1F345}"),
    (":coconut:", "\u{1F965}"),
    (":avocado:", "\u{1F951}"),
    (":eggplant:", "\u{1F346}"),
    (":potato:", "\u{1F954}"),
    (":carrot:", "\u{1F955}"),
    (":ear_of_corn:", "\u{1F33D}"),
    (":hot_pepper:", "\u{1F336}"),
    (":cucumber:", "\u{1F952}"),
    (":leafy_green:", "\u{1F96C}"),
    (":broccoli:", "\u{1F966}"),
    (":garlic:", "\u{1F9C4}"),
    (":onion:", "\u{1F9C5}"),
    (":mushroom:", "\u{1F344}"),
    (":peanuts:", "\u{1F95C}"),
    (":chestnut:", "\u{1F330}"),
    (":bread:", "\u{1F35E}"),
    (":croissant:", "\u{1F950}"),
    (":baguette_bread:", "\u{1F956}"),
    (":pretzel:", "\u{1F968}"),
    (":bagel:", "\u{1F96F}"),
    (":pancakes:", "\u{1F95E}"),
    (":waffle:", "\u{1F9C7}"),
    (":cheese_wedge:", "\u{1F9C0}"),
    (":meat_on_bone:", "\u{1F356}"),
    (":poultry_leg:", "\u{1F357}"),
    (":cut_of_meat:", "\u{1F969}"),
    (":bacon:", "\u{1F953}"),
    (":hamburger:", "\u{1F354}"),
    (":french_fries:", "\u{1F35F}"),
    (":pizza:", "\u{1F355}"),
    (":hot_dog:", "\u{1F32D}"),
    (":sandwich:", "\u{1F96A}"),
    (":taco:", "\u{1F32E}"),
    (":burrito:", "\u{1F32F}"),
    (":cooking:", "\u{1F373}"),
    (":shallow_pan_of_food:", "\u{1F958}"),
    (":pot_of_food:", "\u{1F372}"),
    (":green_salad:", "\u{1F957}"),
    (":popcorn:", "\u{1F37F}"),
    (":butter:", "\u{1F9C8}"),
    (":salt:", "\u{1F9C2}"),
    (":canned_food:", "\u{1F96B}"),
    (":bento_box:", "\u{1F371}"),
    (":rice_cracker:", "\u{1F358}"),
    (":rice_ball:", "\u{1F359}"),
    (":cooked_rice:", "\u{1F35A}"),
    (":curry_rice:", "\u{1F35B}"),
    (":steaming_bowl:", "\u{1F35C}"),
    (":spaghetti:", "\u{1F35D}"),
    (":roasted_sweet_potato:", "\u{1F360}"),
    (":oden:", "\u{1F362}"),
    (":sushi:", "\u{1F363}"),
    (":fried_shrimp:", "\u{1F364}"),
    (":fish_cake_with_swirl:", "\u{1F365}"),
    (":moon_cake:", "\u{1F96E}"),
    (":dango:", "\u{1F361}"),
    (":dumpling:", "\u{1F95F}"),
    (":fortune_cookie:", "\u{1F960}"),
    (":takeout_box:", "\u{1F961}"),
    (":soft_ice_cream:", "\u{1F366}"),
    (":shaved_ice:", "\u{1F367}"),
    (":ice_cream:", "\u{1F368}"),
    (":doughnut:", "\u{1F369}"),
    (":cookie:", "\u{1F36A}"),
    (":birthday_cake:", "\u{1F382}"),
    (":shortcake:", "\u{1F370}"),
    (":cupcake:", "\u{1F9C1}"),
    (":pie:", "\u{1F967}"),
    (":chocolate_bar:", "\u{1F36B}"),
    (":candy:", "\u{1F36C}"),
    (":lollipop:", "\u{1F36D}"),
    (":custard:", "\u{1F36E}"),
    (":honey_pot:", "\u{1F36F}"),
    (":baby_bottle:", "\u{1F37C}"),
    (":glass_of_milk:", "\u{1F95B}"),
    (":hot_beverage:", "\u{2615}"),
    (":teacup_without_handle:", "\u{1F375}"),
    (":sake:", "\u{1F376}"),
    (":bottle_with_popping_cork:", "\u{1F37E}"),
    (":wine_glass:", "\u{1F377}"),
    (":cocktail_glass:", "\u{1F378}"),
    (":tropical_drink:", "\u{1F379}"),
    (":beer_mug:", "\u{1F37A}"),
    (":clinking_beer_mugs:", "\u{1F37B}"),
    (":clinking_glasses:", "\u{1F942}"),
    (":tumbler_glass:", "\u{1F943}"),
    (":cup_with_straw:", "\u{1F964}"),
    (":bubble_tea:", "\u{1F9CB}"),
    (":chopsticks:", "\u{1F962}"),
    (":fork_and_knife_with_plate:", "\u{1F37D}"),
    (":fork_and_knife:", "\u{1F374}"),
    (":spoon:", "\u{1F944}"),
    (":kitchen_knife:", "\u{1F52A}"),
    (":amphora:", "\u{1F3FA}"),
    // Travel & places
    (":globe_showing_Europe-Africa:", "\u{1F30D}"),
    (":globe_showing_Americas:", "\u{1F30E}"),
    (":globe_showing_Asia-Australia:", "\u{1F30F}"),
    (":globe_with_meridians:", "\u{1F310}"),
    (":world_map:", "\u{1F5FA}"),
    (":compass:", "\u{1F9ED}"),
    (":volcano:", "\u{1F30B}"),
    (":mount_fuji:", "\u{1F5FB}"),
    (":camping:", "\u{1F3D5}"),
    (":beach_with_umbrella:", "\u{1F3D6}"),
    (":desert:", "\u{1F3DC}"),
    (":desert_island:", "\u{1F3DD}"),
    (":national_park:", "\u{1F3DE}"),
    (":stadium:", "\u{1F3DF}"),
    (":classical_building:", "\u{1F3DB}"),
    (":building_construction:", "\u{1F3D7}"),
    (":brick:", "\u{1F9F1}"),
    (":houses:", "\u{1F3D8}"),
    (":derelict_house:", "\u{1F3DA}"),
    (":house:", "\u{1F3E0}"),
    (":house_with_garden:", "\u{1F3E1}"),
    (":office_building:", "\u{1F3E2}"),
    (":Japanese_post_office:", "\u{1F3E3}"),
    (":post_office:", "\u{1F3E4}"),
    (":hospital:", "\u{1F3E5}"),
    (":bank:", "\u{1F3E6}"),
    (":hotel:", "\u{1F3E8}"),
    (":love_hotel:", "\u{1F3E9}"),
    (":convenience_store:", "\u{1F3EA}"),
    (":school:", "\u{1F3EB}"),
    (":department_store:", "\u{1F3EC}"),
    (":factory:", "\u{1F3ED}"),
    (":Japanese_castle:", "\u{1F3EF}"),
    (":castle:", "\u{1F3F0}"),
    (":wedding:", "\u{1F492}"),
    (":Tokyo_tower:", "\u{1F5FC}"),
    (":Statue_of_Liberty:", "\u{1F5FD}"),
    (":church:", "\u{26EA}"),
    (":mosque:", "\u{1F54C}"),
    (":synagogue:", "\u{1F54D}"),
    (":shinto_shrine:", "\u{26E9}"),
    (":kaaba:", "\u{1F54B}"),
    (":fountain:", "\u{26F2}"),
    (":tent:", "\u{26FA}"),
    (":foggy:", "\u{1F301}"),
    (":night_with_stars:", "\u{1F303}"),
    (":cityscape_at_dusk:", "\u{1F306}"),
    (":sunset:", "\u{1F307}"),
    (":bridge_at_night:", "\u{1F309}"),
    (":hot_springs:", "\u{2668}"),
    (":carousel_horse:", "\u{1F3A0}"),
    (":ferris_wheel:", "\u{1F3A1}"),
    (":roller_coaster:", "\u{1F3A2}"),
    (":barber_pole:", "\u{1F488}"),
    (":circus_tent:", "\u{1F3AA}"),
    (":locomotive:", "\u{1F682}"),
    (":railway_car:", "\u{1F683}"),
    (":high-speed_train:", "\u{1F684}"),
    (":bullet_train:", "\u{1F685}"),
    (":train:", "\u{1F686}"),
    (":metro:", "\u{1F687}"),
    (":light_rail:", "\u{1F688}"),
    (":station:", "\u{1F689}"),
    (":tram:", "\u{1F68A}"),
    (":monorail:", "\u{1F69D}"),
    (":mountain_railway:", "\u{1F69E}"),
    (":tram_car:", "\u{1F68B}"),
    (":bus:", "\u{1F68C}"),
    (":oncoming_bus:", "\u{1F68D}"),
    (":trolleybus:", "\u{1F68E}"),
    (":minibus:", "\u{1F690}"),
    (":ambulance:", "\u{1F691}"),
    (":fire_engine:", "\u{1F692}"),
    (":police_car:", "\u{1F693}"),
    (":oncoming_police_car:", "\u{1F694}"),
    (":taxi:", "\u{1F695}"),
    (":oncoming_taxi:", "\u{1F696}"),
    (":automobile:", "\u{1F697}"),
    (":oncoming_automobile:", "\u{1F698}"),
    (":sport_utility_vehicle:", "\u{1F699}"),
    (":delivery_truck:", "\u{1F69A}"),
    (":articulated_lorry:", "\u{1F69B}"),
    (":tractor:", "\u{1F69C}"),
    (":racing_car:", "\u{1F3CE}"),
    (":motorcycle:", "\u{1F3CD}"),
    (":motor_scooter:", "\u{1F6F5}"),
    (":bicycle:", "\u{1F6B2}"),
    (":kick_scooter:", "\u{1F6F4}"),
    (":skateboard:", "\u{1F6F9}"),
    (":bus_stop:", "\u{1F68F}"),
    (":motorway:", "\u{1F6E3}"),
    (":railway_track:", "\u{1F6E4}"),
    (":oil_drum:", "\u{1F6E2}"),
    (":fuel_pump:", "\u{26FD}"),
    (":police_car_light:", "\u{1F6A8}"),
    (":horizontal_traffic_light:", "\u{1F6A5}"),
    (":vertical_traffic_light:", "\u{1F6A6}"),
    (":stop_sign:", "\u{1F6D1}"),
    (":construction:", "\u{1F6A7}"),
    (":anchor:", "\u{2693}"),
    (":sailboat:", "\u{26F5}"),
    (":canoe:", "\u{1F6F6}"),
    (":speedboat:", "\u{1F6A4}"),
    (":passenger_ship:", "\u{1F6F3}"),
    (":ferry:", "\u{26F4}"),
    (":motor_boat:", "\u{1F6E5}"),
    (":ship:", "\u{1F6A2}"),
    (":airplane:", "\u{2708}"),
    (":small_airplane:", "\u{1F6E9}"),
    (":airplane_departure:", "\u{1F6EB}"),
    (":airplane_arrival:", "\u{1F6EC}"),
    (":parachute:", "\u{1FA82}"),
    (":seat:", "\u{1F4BA}"),
    (":helicopter:", "\u{1F681}"),
    (":suspension_railway:", "\u{1F69F}"),
    (":mountain_cableway:", "\u{1F6A0}"),
    (":aerial_tramway:", "\u{1F6A1}"),
    (":satellite:", "\u{1F6F0}"),
    (":rocket:", "\u{1F680}"),
    (":flying_saucer:", "\u{1F6F8}"),
    // Sky & weather
    (":hourglass_done:", "\u{231B}"),
    (":hourglass_not_done:", "\u{23F3}"),
    (":watch:", "\u{231A}"),
    (":alarm_clock:", "\u{23F0}"),
    (":stopwatch:", "\u{23F1}"),
    (":timer_clock:", "\u{23F2}"),
    (":mantelpiece_clock:", "\u{1F570}"),
    (":new_moon:", "\u{1F311}"),
    (":full_moon:", "\u{1F315}"),
    (":crescent_moon:", "\u{1F319}"),
    (":sun:", "\u{2600}"),
    (":star:", "\u{2B50}"),
    (":glowing_star:", "\u{1F31F}"),
    (":shooting_star:", "\u{1F320}"),
    (":milky_way:", "\u{1F30C}"),
    (":cloud:", "\u{2601}"),
    (":sun_behind_cloud:", "\u{26C5}"),
    (":cloud_with_lightning_and_rain:", "\u{26C8}"),
    (":tornado:", "\u{1F32A}"),
    (":fog:", "\u{1F32B}"),
    (":wind_face:", "\u{1F32C}"),
    (":cyclone:", "\u{1F300}"),
    (":rainbow:", "\u{1F308}"),
    (":closed_umbrella:", "\u{1F302}"),
    (":umbrella:", "\u{2602}"),
    (":umbrella_with_rain_drops:", "\u{2614}"),
    (":umbrella_on_ground:", "\u{26F1}"),
    (":high_voltage:", "\u{26A1}"),
    (":snowflake:", "\u{2744}"),
    (":snowman:", "\u{2603}"),
    (":snowman_without_snow:", "\u{26C4}"),
    (":comet:", "\u{2604}"),
    (":fire:", "\u{1F525}"),
    (":droplet:", "\u{1F4A7}"),
    (":water_wave:", "\u{1F30A}"),
    // Activities & objects
    (":jack-o-lantern:", "\u{1F383}"),
    (":Christmas_tree:", "\u{1F384}"),
    (":fireworks:", "\u{1F386}"),
    (":sparkler:", "\u{1F387}"),
    (":firecracker:", "\u{1F9E8}"),
    (":sparkles:", "\u{2728}"),
    (":balloon:", "\u{1F388}"),
    (":party_popper:", "\u{1F389}"),
    (":confetti_ball:", "\u{1F38A}"),
    (":tanabata_tree:", "\u{1F38B}"),
    (":pine_decoration:", "\u{1F38D}"),
    (":Japanese_dolls:", "\u{1F38E}"),
    (":carp_streamer:", "\u{1F38F}"),
    (":wind_chime:", "\u{1F390}"),
    (":moon_viewing_ceremony:", "\u{1F391}"),
    (":red_envelope:", "\u{1F9E7}"),
    (":ribbon:", "\u{1F380}"),
    (":wrapped_gift:", "\u{1F381}"),
    (":reminder_ribbon:", "\u{1F397}"),
    (":admission_tickets:", "\u{1F39F}"),
    (":ticket:", "\u{1F3AB}"),
    (":military_medal:", "\u{1F396}"),
    (":trophy:", "\u{1F3C6}"),
    (":sports_medal:", "\u{1F3C5}"),
    (":1st_place_medal:", "\u{1F947}"),
    (":2nd_place_medal:", "\u{1F948}"),
    (":3rd_place_medal:", "\u{1F949}"),
    (":soccer_ball:", "\u{26BD}"),
    (":baseball:", "\u{26BE}"),
    (":softball:", "\u{1F94E}"),
    (":basketball:", "\u{1F3C0}"),
    (":volleyball:", "\u{1F3D0}"),
    (":american_football:", "\u{1F3C8}"),
    (":rugby_football:", "\u{1F3C9}"),
    (":tennis:", "\u{1F3BE}"),
    (":flying_disc:", "\u{1F94F}"),
    (":bowling:", "\u{1F3B3}"),
    (":cricket_game:", "\u{1F3CF}"),
    (":field_hockey:", "\u{1F3D1}"),
    (":ice_hockey:", "\u{1F3D2}"),
    (":lacrosse:", "\u{1F94D}"),
    (":ping_pong:", "\u{1F3D3}"),
    (":badminton:", "\u{1F3F8}"),
    (":boxing_glove:", "\u{1F94A}"),
    (":martial_arts_uniform:", "\u{1F94B}"),
    (":goal_net:", "\u{1F945}"),
    (":flag_in_hole:", "\u{26F3}"),
    (":ice_skate:", "\u{26F8}"),
    (":fishing_pole:", "\u{1F3A3}"),
    (":diving_mask:", "\u{1F93F}"),
    (":running_shirt:", "\u{1F3BD}"),
    (":skis:", "\u{1F3BF}"),
    (":sled:", "\u{1F6F7}"),
    (":curling_stone:", "\u{1F94C}"),
    (":direct_hit:", "\u{1F3AF}"),
    (":yo-yo:", "\u{1FA80}"),
    (":kite:", "\u{1FA81}"),
    (":pool_8_ball:", "\u{1F3B1}"),
    (":crystal_ball:", "\u{1F52E}"),
    (":magic_wand:", "\u{1FA84}"),
    (":nazar_amulet:", "\u{1F9FF}"),
    (":video_game:", "\u{1F3AE}"),
    (":joystick:", "\u{1F579}"),
    (":slot_machine:", "\u{1F3B0}"),
    (":game_die:", "\u{1F3B2}"),
    (":puzzle_piece:", "\u{1F9E9}"),
    (":teddy_bear:", "\u{1F9F8}"),
    (":spade_suit:", "\u{2660}"),
    (":heart_suit:", "\u{2665}"),
    (":diamond_suit:", "\u{2666}"),
    (":club_suit:", "\u{2663}"),
    (":chess_pawn:", "\u{265F}"),
    (":joker:", "\u{1F0CF}"),
    (":mahjong_red_dragon:", "\u{1F004}"),
    (":flower_playing_cards:", "\u{1F3B4}"),
    (":performing_arts:", "\u{1F3AD}"),
    (":framed_picture:", "\u{1F5BC}"),
    (":artist_palette:", "\u{1F3A8}"),
    (":thread:", "\u{1F9F5}"),
    (":yarn:", "\u{1F9F6}"),
    (":glasses:", "\u{1F453}"),
    (":sunglasses:", "\u{1F576}"),
    (":goggles:", "\u{1F97D}"),
    (":lab_coat:", "\u{1F97C}"),
    (":safety_vest:", "\u{1F9BA}"),
    (":necktie:", "\u{1F454}"),
    (":t-shirt:", "\u{1F455}"),
    (":jeans:", "\u{1F456}"),
    (":scarf:", "\u{1F9E3}"),
    (":gloves:", "\u{1F9E4}"),
    (":coat:", "\u{1F9E5}"),
    (":socks:", "\u{1F9E6}"),
    (":dress:", "\u{1F457}"),
    (":kimono:", "\u{1F458}"),
    (":sari:", "\u{1F97B}"),
    (":one-piece_swimsuit:", "\u{1FA71}"),
    (":bikini:", "\u{1F459}"),
    (":woman’s_clothes:", "\u{1F45A}"),
    (":purse:", "\u{1F45B}"),
    (":handbag:", "\u{1F45C}"),
    (":clutch_bag:", "\u{1F45D}"),
    (":shopping_bags:", "\u{1F6CD}"),
    (":backpack:", "\u{1F392}"),
    (":man’s_shoe:", "\u{1F45E}"),
    (":running_shoe:", "\u{1F45F}"),
    (":hiking_boot:", "\u{1F97E}"),
    (":flat_shoe:", "\u{1F97F}"),
    (":high-heeled_shoe:", "\u{1F460}"),
    (":woman’s_sandal:", "\u{1F461}"),
    (":ballet_shoes:", "\u{1FA70}"),
    (":woman’s_boot:", "\u{1F462}"),
    (":crown:", "\u{1F451}"),
    (":woman’s_hat:", "\u{1F452}"),
    (":top_hat:", "\u{1F3A9}"),
    (":graduation_cap:", "\u{1F393}"),
    (":billed_cap:", "\u{1F9E2}"),
    (":rescue_worker’s_helmet:", "\u{26D1}"),
    (":prayer_beads:", "\u{1F4FF}"),
    (":lipstick:", "\u{1F484}"),
    (":ring:", "\u{1F48D}"),
    (":gem_stone:", "\u{1F48E}"),
    (":muted_speaker:", "\u{1F507}"),
    (":speaker_low_volume:", "\u{1F508}"),
    (":speaker_medium_volume:", "\u{1F509}"),
    (":speaker_high_volume:", "\u{1F50A}"),
    (":loudspeaker:", "\u{1F4E2}"),
    (":megaphone:", "\u{1F4E3}"),
    (":postal_horn:", "\u{1F4EF}"),
    (":bell:", "\u{1F514}"),
    (":bell_with_slash:", "\u{1F515}"),
    (":musical_score:", "\u{1F3BC}"),
    (":musical_note:", "\u{1F3B5}"),
    (":musical_notes:", "\u{1F3B6}"),
    (":studio_microphone:", "\u{1F399}"),
    (":level_slider:", "\u{1F39A}"),
    (":control_knobs:", "\u{1F39B}"),
    (":microphone:", "\u{1F3A4}"),
    (":headphone:", "\u{1F3A7}"),
    (":radio:", "\u{1F4FB}"),
    (":saxophone:", "\u{1F3B7}"),
    (":guitar:", "\u{1F3B8}"),
    (":musical_keyboard:", "\u{1F3B9}"),
    (":trumpet:", "\u{1F3BA}"),
    (":violin:", "\u{1F3BB}"),
    (":banjo:", "\u{1FA95}"),
    (":drum:", "\u{1F941}"),
    (":mobile_phone:", "\u{1F4F1}"),
    (":mobile_phone_with_arrow:", "\u{1F4F2}"),
    (":telephone:", "\u{260E}"),
    (":telephone_receiver:", "\u{1F4DE}"),
    (":pager:", "\u{1F4DF}"),
    (":fax_machine:", "\u{1F4E0}"),
    (":battery:", "\u{1F50B}"),
    (":electric_plug:", "\u{1F50C}"),
    (":laptop:", "\u{1F4BB}"),
    (":desktop_computer:", "\u{1F5A5}"),
    (":printer:", "\u{1F5A8}"),
    (":keyboard:", "\u{2328}"),
    (":computer_mouse:", "\u{1F5B1}"),
    (":trackball:", "\u{1F5B2}"),
    (":computer_disk:", "\u{1F4BD}"),
    (":floppy_disk:", "\u{1F4BE}"),
    (":optical_disk:", "\u{1F4BF}"),
    (":dvd:", "\u{1F4C0}"),
    (":abacus:", "\u{1F9EE}"),
    (":movie_camera:", "\u{1F3A5}"),
    (":film_frames:", "\u{1F39E}"),
    (":film_projector:", "\u{1F4FD}"),
    (":clapper_board:", "\u{1F3AC}"),
    (":television:", "\u{1F4FA}"),
    (":camera:", "\u{1F4F7}"),
    (":camera_with_flash:", "\u{1F4F8}"),
    (":video_camera:", "\u{1F4F9}"),
    (":videocassette:", "\u{1F4FC}"),
    (":magnifying_glass_tilted_left:", "\u{1F50D}"),
    (":magnifying_glass_tilted_right:", "\u{1F50E}"),
    (":candle:", "\u{1F56F}"),
    (":light_bulb:", "\u{1F4A1}"),
    (":flashlight:", "\u{1F526}"),
    (":red_paper_lantern:", "\u{1F3EE}"),
    (":diya_lamp:", "\u{1FA94}"),
    (":notebook_with_decorative_cover:", "\u{1F4D4}"),
    (":closed_book:", "\u{1F4D5}"),
    (":open_book:", "\u{1F4D6}"),
    (":green_book:", "\u{1F4D7}"),
    (":blue_book:", "\u{1F4D8}"),
    (":orange_book:", "\u{1F4D9}"),
    (":books:", "\u{1F4DA}"),
    (":notebook:", "\u{1F4D3}"),
    (":ledger:", "\u{1F4D2}"),
    (":page_with_curl:", "\u{1F4C3}"),
    (":scroll:", "\u{1F4DC}"),
    (":page_facing_up:", "\u{1F4C4}"),
    (":newspaper:", "\u{1F4F0}"),
    (":rolled-up_newspaper:", "\u{1F5DE}"),
    (":bookmark_tabs:", "\u{1F4D1}"),
    (":bookmark:", "\u{1F516}"),
    (":label:", "\u{1F3F7}"),
    (":money_bag:", "\u{1F4B0}"),
    (":coin:", "\u{1FA99}"),
    (":yen_banknote:", "\u{1F4B4}"),
    (":dollar_banknote:", "\u{1F4B5}"),
    (":euro_banknote:", "\u{1F4B6}"),
    (":pound_banknote:", "\u{1F4B7}"),
    (":money_with_wings:", "\u{1F4B8}"),
    (":credit_card:", "\u{1F4B3}"),
    (":receipt:", "\u{1F9FE}"),
    (":chart_increasing_with_yen:", "\u{1F4B9}"),
    (":envelope:", "\u{2709}"),
    (":e-mail:", "\u{1F4E7}"),
    (":incoming_envelope:", "\u{1F4E8}"),
    (":envelope_with_arrow:", "\u{1F4E9}"),
    (":outbox_tray:", "\u{1F4E4}"),
    (":inbox_tray:", "\u{1F4E5}"),
    (":package:", "\u{1F4E6}"),
    (":closed_mailbox_with_raised_flag:", "\u{1F4EB}"),
    (":closed_mailbox_with_lowered_flag:", "\u{1F4EA}"),
    (":open_mailbox_with_raised_flag:", "\u{1F4EC}"),
    (":open_mailbox_with_lowered_flag:", "\u{1F4ED}"),
    (":postbox:", "\u{1F4EE}"),
    (":ballot_box_with_ballot:", "\u{1F5F3}"),
    (":pencil:", "\u{270F}"),
    (":black_nib:", "\u{2712}"),
    (":fountain_pen:", "\u{1F58B}"),
    (":pen:", "\u{1F58A}"),
    (":paintbrush:", "\u{1F58C}"),
    (":crayon:", "\u{1F58D}"),
    (":memo:", "\u{1F4DD}"),
    (":briefcase:", "\u{1F4BC}"),
    (":file_folder:", "\u{1F4C1}"),
    (":open_file_folder:", "\u{1F4C2}"),
    (":card_index_dividers:", "\u{1F5C2}"),
    (":calendar:", "\u{1F4C5}"),
    (":tear-off_calendar:", "\u{1F4C6}"),
    (":spiral_notepad:", "\u{1F5D2}"),
    (":spiral_calendar:", "\u{1F5D3}"),
    (":card_index:", "\u{1F4C7}"),
    (":chart_increasing:", "\u{1F4C8}"),
    (":chart_decreasing:", "\u{1F4C9}"),
    (":bar_chart:", "\u{1F4CA}"),
    (":clipboard:", "\u{1F4CB}"),
    (":pushpin:", "\u{1F4CC}"),
    (":round_pushpin:", "\u{1F4CD}"),
    (":paperclip:", "\u{1F4CE}"),
    (":linked_paperclips:", "\u{1F587}"),
    (":straight_ruler:", "\u{1F4CF}"),
    (":triangular_ruler:", "\u{1F4D0}"),
    (":scissors:", "\u{2702}"),
    (":card_file_box:", "\u{1F5C3}"),
    (":file_cabinet:", "\u{1F5C4}"),
    (":wastebasket:", "\u{1F5D1}"),
    (":locked:", "\u{1F512}"),
    (":unlocked:", "\u{1F513}"),
    (":locked_with_pen:", "\u{1F50F}"),
    (":locked_with_key:", "\u{1F510}"),
    (":key:", "\u{1F511}"),
    (":old_key:", "\u{1F5DD}"),
    (":hammer:", "\u{1F528}"),
    (":axe:", "\u{1FA93}"),
    (":pick:", "\u{26CF}"),
    (":hammer_and_pick:", "\u{2692}"),
    (":hammer_and_wrench:", "\u{1F6E0}"),
    (":dagger:", "\u{1F5E1}"),
    (":crossed_swords:", "\u{2694}"),
    (":water_pistol:", "\u{1F52B}"),
    (":bow_and_arrow:", "\u{1F3F9}"),
    (":shield:", "\u{1F6E1}"),
    (":wrench:", "\u{1F527}"),
    (":nut_and_bolt:", "\u{1F529}"),
    (":gear:", "\u{2699}"),
    (":clamp:", "\u{1F5DC}"),
    (":balance_scale:", "\u{2696}"),
    (":probing_cane:", "\u{1F9AF}"),
    (":link:", "\u{1F517}"),
    (":chains:", "\u{26D3}"),
    (":toolbox:", "\u{1F9F0}"),
    (":magnet:", "\u{1F9F2}"),
    (":alembic:", "\u{2697}"),
    (":test_tube:", "\u{1F9EA}"),
    (":petri_dish:", "\u{1F9EB}"),
    (":dna:", "\u{1F9EC}"),
    (":microscope:", "\u{1F52C}"),
    (":telescope:", "\u{1F52D}"),
    (":satellite_antenna:", "\u{1F4E1}"),
    (":syringe:", "\u{1F489}"),
    (":drop_of_blood:", "\u{1FA78}"),
    (":pill:", "\u{1F48A}"),
    (":adhesive_bandage:", "\u{1FA79}"),
    (":stethoscope:", "\u{1FA7A}"),
    (":door:", "\u{1F6AA}"),
    (":bed:", "\u{1F6CF}"),
    (":couch_and_lamp:", "\u{1F6CB}"),
    (":chair:", "\u{1FA91}"),
    (":toilet:", "\u{1F6BD}"),
    (":shower:", "\u{1F6BF}"),
    (":bathtub:", "\u{1F6C1}"),
    (":razor:", "\u{1FA92}"),
    (":lotion_bottle:", "\u{1F9F4}"),
    (":safety_pin:", "\u{1F9F7}"),
    (":broom:", "\u{1F9F9}"),
    (":basket:", "\u{1F9FA}"),
    (":roll_of_paper:", "\u{1F9FB}"),
    (":soap:", "\u{1F9FC}"),
    (":sponge:", "\u{1F9FD}"),
    (":fire_extinguisher:", "\u{1F9EF}"),
    (":shopping_cart:", "\u{1F6D2}"),
    (":cigarette:", "\u{1F6AC}"),
    (":coffin:", "\u{26B0}"),
    (":funeral_urn:", "\u{26B1}"),
    (":moai:", "\u{1F5FF}"),
    // Symbols
    (":ATM_sign:", "\u{1F3E7}"),
    (":litter_in_bin_sign:", "\u{1F6AE}"),
    (":potable_water:", "\u{1F6B0}"),
    (":wheelchair_symbol:", "\u{267F}"),
    (":men’s_room:", "\u{1F6B9}"),
    (":women’s_room:", "\u{1F6BA}"),
    (":restroom:", "\u{1F6BB}"),
    (":baby_symbol:", "\u{1F6BC}"),
    (":water_closet:", "\u{1F6BE}"),
    (":passport_control:", "\u{1F6C2}"),
    (":customs:", "\u{1F6C3}"),
    (":baggage_claim:", "\u{1F6C4}"),
    (":left_luggage:", "\u{1F6C5}"),
    (":warning:", "\u{26A0}"),
    (":children_crossing:", "\u{1F6B8}"),
    (":no_entry:", "\u{26D4}"),
    (":prohibited:", "\u{1F6AB}"),
    (":no_bicycles:", "\u{1F6B3}"),
    (":no_smoking:", "\u{1F6AD}"),
    (":no_littering:", "\u{1F6AF}"),
    (":non-potable_water:", "\u{1F6B1}"),
    (":no_pedestrians:", "\u{1F6B7}"),
    (":no_one_under_eighteen:", "\u{1F51E}"),
    (":radioactive:", "\u{2622}"),
    (":biohazard:", "\u{2623}"),
    (":up_arrow:", "\u{2B06}"),
    (":up-right_arrow:", "\u{2197}"),
    (":right_arrow:", "\u{27A1}"),
    (":down-right_arrow:", "\u{2198}"),
    (":down_arrow:", "\u{2B07}"),
    (":down-left_arrow:", "\u{2199}"),
    (":left_arrow:", "\u{2B05}"),
    (":up-left_arrow:", "\u{2196}"),
    (":up-down_arrow:", "\u{2195}"),
    (":left-right_arrow:", "\u{2194}"),
    (":right_arrow_curving_left:", "\u{21A9}"),
    (":left_arrow_curving_right:", "\u{21AA}"),
    (":right_arrow_curving_up:", "\u{2934}"),
    (":right_arrow_curving_down:", "\u{2935}"),
    (":clockwise_vertical_arrows:", "\u{1F503}"),
    (":counterclockwise_arrows_button:", "\u{1F504}"),
    (":BACK_arrow:", "\u{1F519}"),
    (":END_arrow:", "\u{1F51A}"),
    (":ON!_arrow:", "\u{1F51B}"),
    (":SOON_arrow:", "\u{1F51C}"),
    (":TOP_arrow:", "\u{1F51D}"),
    (":place_of_worship:", "\u{1F6D0}"),
    (":atom_symbol:", "\u{269B}"),
    (":om:", "\u{1F549}"),
    (":star_of_David:", "\u{2721}"),
    (":wheel_of_dharma:", "\u{2638}"),
    (":yin_yang:", "\u{262F}"),
    (":latin_cross:", "\u{271D}"),
    (":orthodox_cross:", "\u{2626}"),
    (":star_and_crescent:", "\u{262A}"),
    (":peace_symbol:", "\u{262E}"),
    (":menorah:", "\u{1F54E}"),
    (":dotted_six-pointed_star:", "\u{1F52F}"),
    (":Aries:", "\u{2648}"),
    (":Taurus:", "\u{2649}"),
    (":Gemini:", "\u{264A}"),
    (":Cancer:", "\u{264B}"),
    (":Leo:", "\u{264C}"),
    (":Virgo:", "\u{264D}"),
    (":Libra:", "\u{264E}"),
    (":Scorpio:", "\u{264F}"),
    (":Sagittarius:", "\u{2650}"),
    (":Capricorn:", "\u{2651}"),
    (":Aquarius:", "\u{2652}"),
    (":Pisces:", "\u{2653}"),
    (":Ophiuchus:", "\u{26CE}"),
    (":shuffle_tracks_button:", "\u{1F500}"),
    (":repeat_button:", "\u{1F501}"),
    (":repeat_single_button:", "\u{1F502}"),
    (":play_button:", "\u{25B6}"),
    (":fast-forward_button:", "\u{23E9}"),
    (":next_track_button:", "\u{23ED}"),
    (":play_or_pause_button:", "\u{23EF}"),
    (":reverse_button:", "\u{25C0}"),
    (":fast_reverse_button:", "\u{23EA}"),
    (":last_track_button:", "\u{23EE}"),
    (":upwards_button:", "\u{1F53C}"),
    (":fast_up_button:", "\u{23EB}"),
    (":downwards_button:", "\u{1F53D}"),
    (":fast_down_button:", "\u{23EC}"),
    (":pause_button:", "\u{23F8}"),
    (":stop_button:", "\u{23F9}"),
    (":record_button:", "\u{23FA}"),
    (":eject_button:", "\u{23CF}"),
    (":cinema:", "\u{1F3A6}"),
    (":dim_button:", "\u{1F505}"),
    (":bright_button:", "\u{1F506}"),
    (":antenna_bars:", "\u{1F4F6}"),
    (":vibration_mode:", "\u{1F4F3}"),
    (":mobile_phone_off:", "\u{1F4F4}"),
    (":female_sign:", "\u{2640}"),
    (":male_sign:", "\u{2642}"),
    (":medical_symbol:", "\u{2695}"),
    (":infinity:", "\u{267E}"),
    (":recycling_symbol:", "\u{267B}"),
    (":fleur-de-lis:", "\u{269C}"),
    (":trident_emblem:", "\u{1F531}"),
    (":name_badge:", "\u{1F4DB}"),
    (":Japanese_symbol_for_beginner:", "\u{1F530}"),
    (":hollow_red_circle:", "\u{2B55}"),
    (":check_mark_button:", "\u{2705}"),
    (":check_box_with_check:", "\u{2611}"),
    (":check_mark:", "\u{2714}"),
    (":multiply:", "\u{2716}"),
    (":plus:", "\u{2795}"),
    (":minus:", "\u{2796}"),
    (":divide:", "\u{2797}"),
    (":cross_mark:", "\u{274C}"),
    (":cross_mark_button:", "\u{274E}"),
    (":curly_loop:", "\u{27B0}"),
    (":double_curly_loop:", "\u{27BF}"),
    (":part_alternation_mark:", "\u{303D}"),
    (":eight-spoked_asterisk:", "\u{2733}"),
    (":eight-pointed_star:", "\u{2734}"),
    (":sparkle:", "\u{2747}"),
    (":double_exclamation_mark:", "\u{203C}"),
    (":exclamation_question_mark:", "\u{2049}"),
    (":question_mark:", "\u{2753}"),
    (":white_question_mark:", "\u{2754}"),
    (":white_exclamation_mark:", "\u{2755}"),
    (":exclamation_mark:", "\u{2757}"),
    (":wavy_dash:", "\u{3030}"),
    (":copyright:", "\u{00A9}"),
    (":registered:", "\u{00AE}"),
    (":trade_mark:", "\u{2122}"),
    (":keycap_#:", "#\u{FE0F}\u{20E3}"),
    (":keycap_*:", "*\u{FE0F}\u{20E3}"),
    (":keycap_0:", "0\u{FE0F}\u{20E3}"),
    (":keycap_1:", "1\u{FE0F}\u{20E3}"),
    (":keycap_2:", "2\u{FE0F}\u{20E3}"),
    (":keycap_3:", "3\u{FE0F}\u{20E3}"),
    (":keycap_4:", "4\u{FE0F}\u{20E3}"),
    (":keycap_5:", "5\u{FE0F}\u{20E3}"),
    (":keycap_6:", "6\u{FE0F}\u{20E3}"),
    (":keycap_7:", "7\u{FE0F}\u{20E3}"),
    (":keycap_8:", "8\u{FE0F}\u{20E3}"),
    (":keycap_9:", "9\u{FE0F}\u{20E3}"),
    (":keycap_10:", "\u{1F51F}"),
    (":input_latin_uppercase:", "\u{1F520}"),
    (":input_latin_lowercase:", "\u{1F521}"),
    (":input_numbers:", "\u{1F522}"),
    (":input_symbols:", "\u{1F523}"),
    (":input_latin_letters:", "\u{1F524}"),
    (":information:", "\u{2139}"),
    (":circled_M:", "\u{24C2}"),
    (":CL_button:", "\u{1F191}"),
    (":COOL_button:", "\u{1F192}"),
    (":FREE_button:", "\u{1F193}"),
    (":ID_button:", "\u{1F194}"),
    (":NEW_button:", "\u{1F195}"),
    (":NG_button:", "\u{1F196}"),
    (":OK_button:", "\u{1F197}"),
    (":SOS_button:", "\u{1F198}"),
    (":UP!_button:", "\u{1F199}"),
    (":VS_button:", "\u{1F19A}"),
    (":red_circle:", "\u{1F534}"),
    (":orange_circle:", "\u{1F7E0}"),
    (":yellow_circle:", "\u{1F7E1}"),
    (":green_circle:", "\u{1F7E2}"),
    (":blue_circle:", "\u{1F535}"),
    (":purple_circle:", "\u{1F7E3}"),
    (":brown_circle:", "\u{1F7E4}"),
    (":black_circle:", "\u{26AB}"),
    (":white_circle:", "\u{26AA}"),
    (":red_square:", "\u{1F7E5}"),
    (":orange_square:", "\u{1F7E7}"),
    (":yellow_square:", "\u{1F7E8}"),
    (":green_square:", "\u{1F7E9}"),
    (":blue_square:", "\u{1F7E6}"),
    (":purple_square:", "\u{1F7EA}"),
    (":brown_square:", "\u{1F7EB}"),
    (":black_large_square:", "\u{2B1B}"),
    (":white_large_square:", "\u{2B1C}"),
    (":black_medium_square:", "\u{25FC}"),
    (":white_medium_square:", "\u{25FB}"),
    (":black_medium-small_square:", "\u{25FE}"),
    (":white_medium-small_square:", "\u{25FD}"),
    (":black_small_square:", "\u{25AA}"),
    (":white_small_square:", "\u{25AB}"),
    (":large_orange_diamond:", "\u{1F536}"),
    (":large_blue_diamond:", "\u{1F537}"),
    (":small_orange_diamond:", "\u{1F538}"),
    (":small_blue_diamond:", "\u{1F539}"),
    (":red_triangle_pointed_up:", "\u{1F53A}"),
    (":red_triangle_pointed_down:", "\u{1F53B}"),
    (":diamond_with_a_dot:", "\u{1F4A0}"),
    (":radio_button:", "\u{1F518}"),
    (":white_square_button:", "\u{1F533}"),
    (":black_square_button:", "\u{1F532}"),
    // Flags
    (":chequered_flag:", "\u{1F3C1}"),
    (":triangular_flag:", "\u{1F6A9}"),
    (":crossed_flags:", "\u{1F38C}"),
    (":black_flag:", "\u{1F3F4}"),
    (":white_flag:", "\u{1F3F3}"),
    (":rainbow_flag:", "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}"),
    (":pirate_flag:", "\u{1F3F4}\u{200D}\u{2620}\u{FE0F}"),
    (":United_States:", "\u{1F1FA}\u{1F1F8}"),
    (":United_Kingdom:", "\u{1F1EC}\u{1F1E7}"),
    (":France:", "\u{1F1EB}\u{1F1F7}"),
    (":Germany:", "\u{1F1E9}\u{1F1EA}"),
    (":Italy:", "\u{1F1EE}\u{1F1F9}"),
    (":Spain:", "\u{1F1EA}\u{1F1F8}"),
    (":Japan:", "\u{1F1EF}\u{1F1F5}"),
    (":China:", "\u{1F1E8}\u{1F1F3}"),
    (":South_Korea:", "\u{1F1F0}\u{1F1F7}"),
    (":India:", "\u{1F1EE}\u{1F1F3}"),
    (":Nepal:", "\u{1F1F3}\u{1F1F5}"),
    (":Brazil:", "\u{1F1E7}\u{1F1F7}"),
    (":Canada:", "\u{1F1E8}\u{1F1E6}"),
    (":Russia:", "\u{1F1F7}\u{1F1FA}"),
    (":Åland_Islands:", "\u{1F1E6}\u{1F1FD}"),
    (":Côte_d’Ivoire:", "\u{1F1E8}\u{1F1EE}"),
    (":Curaçao:", "\u{1F1E8}\u{1F1FC}"),
    (":Réunion:", "\u{1F1F7}\u{1F1EA}"),
    (":São_Tomé_&_Príncipe:", "\u{1F1F8}\u{1F1F9}"),
];

/// Global alias pairs layered over the `en` table.
///
/// The alias name table is a superset of the canonical `en` names plus these
/// pairs; aliases are shared across all languages. Where several aliases map
/// to one sequence, the last entry wins the reverse (sequence → name)
/// direction.
pub const EMOJI_ALIASES: &[(&str, &str)] = &[
    (":+1:", "\u{1F44D}"),
    (":thumbsup:", "\u{1F44D}"),
    (":-1:", "\u{1F44E}"),
    (":thumbsdown:", "\u{1F44E}"),
    (":heart:", "\u{2764}"),
    (":joy:", "\u{1F602}"),
    (":smiley:", "\u{1F603}"),
    (":smile:", "\u{1F604}"),
    (":grin:", "\u{1F601}"),
    (":satisfied:", "\u{1F606}"),
    (":laughing:", "\u{1F606}"),
    (":sweat_smile:", "\u{1F605}"),
    (":rofl:", "\u{1F923}"),
    (":wink:", "\u{1F609}"),
    (":blush:", "\u{1F60A}"),
    (":innocent:", "\u{1F607}"),
    (":heart_eyes:", "\u{1F60D}"),
    (":kissing_heart:", "\u{1F618}"),
    (":thinking:", "\u{1F914}"),
    (":sunglasses:", "\u{1F60E}"),
    (":smirk:", "\u{1F60F}"),
    (":sob:", "\u{1F62D}"),
    (":cry:", "\u{1F622}"),
    (":rage:", "\u{1F621}"),
    (":scream:", "\u{1F631}"),
    (":sleeping:", "\u{1F634}"),
    (":mask:", "\u{1F637}"),
    (":hankey:", "\u{1F4A9}"),
    (":poop:", "\u{1F4A9}"),
    (":ok_hand:", "\u{1F44C}"),
    (":v:", "\u{270C}"),
    (":punch:", "\u{1F44A}"),
    (":facepunch:", "\u{1F44A}"),
    (":wave:", "\u{1F44B}"),
    (":clap:", "\u{1F44F}"),
    (":muscle:", "\u{1F4AA}"),
    (":pray:", "\u{1F64F}"),
    (":point_up:", "\u{261D}"),
    (":point_left:", "\u{1F448}"),
    (":point_right:", "\u{1F449}"),
    (":point_up_2:", "\u{1F446}"),
    (":point_down:", "\u{1F447}"),
    (":dog:", "\u{1F436}"),
    (":cat:", "\u{1F431}"),
    (":boom:", "\u{1F4A5}"),
    (":zap:", "\u{26A1}"),
    (":star2:", "\u{1F31F}"),
    (":sunny:", "\u{2600}"),
    (":100:", "\u{1F4AF}"),
    (":tada:", "\u{1F389}"),
    (":gift:", "\u{1F381}"),
    (":christmas_tree:", "\u{1F384}"),
    (":santa:", "\u{1F385}"),
    (":cake:", "\u{1F382}"),
    (":birthday:", "\u{1F382}"),
    (":beer:", "\u{1F37A}"),
    (":beers:", "\u{1F37B}"),
    (":coffee:", "\u{2615}"),
    (":fries:", "\u{1F35F}"),
    (":apple:", "\u{1F34E}"),
    (":car:", "\u{1F697}"),
    (":red_car:", "\u{1F697}"),
    (":knife:", "\u{1F52A}"),
    (":gun:", "\u{1F52B}"),
    (":computer:", "\u{1F4BB}"),
    (":tv:", "\u{1F4FA}"),
    (":phone:", "\u{260E}"),
    (":email:", "\u{2709}"),
    (":bulb:", "\u{1F4A1}"),
    (":mag:", "\u{1F50D}"),
    (":lock:", "\u{1F512}"),
    (":unlock:", "\u{1F513}"),
    (":moneybag:", "\u{1F4B0}"),
    (":dollar:", "\u{1F4B5}"),
    (":book:", "\u{1F4D6}"),
    (":pencil2:", "\u{270F}"),
    (":x:", "\u{274C}"),
    (":o:", "\u{2B55}"),
    (":heartbeat:", "\u{1F493}"),
    (":heartpulse:", "\u{1F497}"),
    (":us:", "\u{1F1FA}\u{1F1F8}"),
    (":gb:", "\u{1F1EC}\u{1F1E7}"),
    (":uk:", "\u{1F1EC}\u{1F1E7}"),
    (":fr:", "\u{1F1EB}\u{1F1F7}"),
    (":de:", "\u{1F1E9}\u{1F1EA}"),
    (":jp:", "\u{1F1EF}\u{1F1F5}"),
    (":cn:", "\u{1F1E8}\u{1F1F3}"),
    (":kr:", "\u{1F1F0}\u{1F1F7}"),
    (":it:", "\u{1F1EE}\u{1F1F9}"),
    (":es:", "\u{1F1EA}\u{1F1F8}"),
    (":ru:", "\u{1F1F7}\u{1F1FA}"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_data_loaded() {
        assert!(!EMOJI_EN.is_empty(), "en table should be populated");
        assert!(!EMOJI_ALIASES.is_empty(), "alias table should be populated");
    }

    #[test]
    fn test_names_carry_canonical_delimiters() {
        for (name, _) in EMOJI_EN.iter().chain(EMOJI_ALIASES.iter()) {
            assert!(
                name.starts_with(':') && name.ends_with(':') && name.len() > 2,
                "Name '{}' should be wrapped in canonical delimiters",
                name
            );
        }
    }

    #[test]
    fn test_en_names_unique() {
        let mut seen = HashSet::new();
        for (name, _) in EMOJI_EN {
            assert!(seen.insert(name), "Duplicate name '{}'", name);
        }
    }

    #[test]
    fn test_en_sequences_unique() {
        // Decode is only a bijection if no two canonical names share a
        // sequence.
        let mut seen = HashSet::new();
        for (name, sequence) in EMOJI_EN {
            assert!(seen.insert(sequence), "Duplicate sequence for '{}'", name);
        }
    }

    #[test]
    fn test_sequences_nonempty() {
        for (name, sequence) in EMOJI_EN.iter().chain(EMOJI_ALIASES.iter()) {
            assert!(!sequence.is_empty(), "Empty sequence for '{}'", name);
        }
    }

    #[test]
    fn test_well_known_entries() {
        assert!(EMOJI_EN.contains(&(":thumbs_up:", "\u{1F44D}")));
        assert!(EMOJI_EN.contains(&(":red_heart:", "\u{2764}")));
        assert!(EMOJI_EN.contains(&(":hushed_face:", "\u{1F62F}")));
        assert!(EMOJI_ALIASES.contains(&(":thumbsup:", "\u{1F44D}")));
    }
}
