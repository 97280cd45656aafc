mod character_list;
