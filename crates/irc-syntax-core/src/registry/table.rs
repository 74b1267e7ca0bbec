//! The registry table.
//!
//! Numeric rows are addressed to a client; the first wire argument (the
//! target nickname) is carried by the [`Context`](crate::Context) and is not
//! counted by the arity contract.
//!
//! # Reference
//! - RFC 1459, RFC 2812
//! - <https://modern.ircdocs.horse/>
//! - IRCv3 specifications

use crate::arity::Arity::{Any, AtLeast, Between, Exact};

declare_operations! {
    numeric {
        // === Connection registration (001-099) ===

        /// 001 RPL_WELCOME
        1 => Welcome, on_welcome, Exact(1), (message: text);
        /// 002 RPL_YOURHOST
        2 => YourHost, on_your_host, Exact(1), (message: text);
        /// 003 RPL_CREATED
        3 => Created, on_created, Exact(1), (message: text);
        /// 004 RPL_MYINFO - server name, version and supported modes
        4 => MyInfo, on_my_info, Between(4, 5),
            (server: text, version: text, user_modes: text, channel_modes: text, parameter_modes: opt);
        /// 005 RPL_ISUPPORT - feature tokens followed by a trailing message
        5 => Isupport, on_isupport, AtLeast(2), (message: last, tokens: rest);
        /// 010 RPL_BOUNCE - redirect to another server
        10 => Bounce, on_bounce, Exact(3), (hostname: text, port: text, message: text);
        /// 042 RPL_YOURID
        42 => YourId, on_your_id, Exact(2), (id: text, message: text);

        // === Trace and stats (200-299) ===

        /// 200 RPL_TRACELINK
        200 => TraceLink, on_trace_link, Any, (arguments: rest);
        /// 201 RPL_TRACECONNECTING
        201 => TraceConnecting, on_trace_connecting, Any, (arguments: rest);
        /// 202 RPL_TRACEHANDSHAKE
        202 => TraceHandshake, on_trace_handshake, Any, (arguments: rest);
        /// 203 RPL_TRACEUNKNOWN
        203 => TraceUnknown, on_trace_unknown, Any, (arguments: rest);
        /// 204 RPL_TRACEOPERATOR
        204 => TraceOperator, on_trace_operator, Any, (arguments: rest);
        /// 205 RPL_TRACEUSER
        205 => TraceUser, on_trace_user, Any, (arguments: rest);
        /// 206 RPL_TRACESERVER
        206 => TraceServer, on_trace_server, Any, (arguments: rest);
        /// 207 RPL_TRACESERVICE
        207 => TraceService, on_trace_service, Any, (arguments: rest);
        /// 208 RPL_TRACENEWTYPE
        208 => TraceNewType, on_trace_new_type, Any, (arguments: rest);
        /// 209 RPL_TRACECLASS
        209 => TraceClass, on_trace_class, Any, (arguments: rest);
        /// 210 RPL_TRACERECONNECT
        210 => TraceReconnect, on_trace_reconnect, Any, (arguments: rest);
        /// 211 RPL_STATSLINKINFO
        211 => StatsLinkInfo, on_stats_link_info, Any, (arguments: rest);
        /// 212 RPL_STATSCOMMANDS
        212 => StatsCommands, on_stats_commands, Any, (arguments: rest);
        /// 216 RPL_STATSKLINE
        216 => StatsKLine, on_stats_k_line, Any, (arguments: rest);
        /// 219 RPL_ENDOFSTATS
        219 => EndOfStats, on_end_of_stats, Exact(2), (query: text, message: text);
        /// 220 RPL_STATSDLINE
        220 => StatsDLine, on_stats_d_line, Any, (arguments: rest);
        /// 221 RPL_UMODEIS - current user modes
        221 => UModeIs, on_u_mode_is, AtLeast(1), (modes: text, arguments: rest);
        /// 226 RPL_STATSSHUN
        226 => StatsShun, on_stats_shun, Any, (arguments: rest);
        /// 234 RPL_SERVLIST
        234 => ServList, on_serv_list, Exact(6),
            (name: text, server: text, mask: text, kind: text, hopcount: text, info: text);
        /// 235 RPL_SERVLISTEND
        235 => ServListEnd, on_serv_list_end, Exact(3), (mask: text, kind: text, message: text);
        /// 242 RPL_STATSUPTIME
        242 => StatsUptime, on_stats_uptime, Exact(1), (message: text);
        /// 243 RPL_STATSOLINE
        243 => StatsOLine, on_stats_o_line, Any, (arguments: rest);
        /// 249 RPL_STATSDEBUG
        249 => StatsDebug, on_stats_debug, Any, (arguments: rest);
        /// 251 RPL_LUSERCLIENT
        251 => LuserClient, on_luser_client, Exact(1), (message: text);
        /// 252 RPL_LUSEROP
        252 => LuserOp, on_luser_op, Exact(2), (count: text, message: text);
        /// 253 RPL_LUSERUNKNOWN
        253 => LuserUnknown, on_luser_unknown, Exact(2), (count: text, message: text);
        /// 254 RPL_LUSERCHANNELS
        254 => LuserChannels, on_luser_channels, Exact(2), (count: text, message: text);
        /// 255 RPL_LUSERME
        255 => LuserMe, on_luser_me, Exact(1), (message: text);
        /// 256 RPL_ADMINME
        256 => AdminMe, on_admin_me, Between(1, 2), (server: opt, message: last);
        /// 257 RPL_ADMINLOC1
        257 => AdminLoc1, on_admin_loc1, Exact(1), (info: text);
        /// 258 RPL_ADMINLOC2
        258 => AdminLoc2, on_admin_loc2, Exact(1), (info: text);
        /// 259 RPL_ADMINEMAIL
        259 => AdminEmail, on_admin_email, Exact(1), (info: text);
        /// 261 RPL_TRACELOG
        261 => TraceLog, on_trace_log, Any, (arguments: rest);
        /// 262 RPL_TRACEEND
        262 => TraceEnd, on_trace_end, Any, (arguments: rest);
        /// 263 RPL_TRYAGAIN
        263 => TryAgain, on_try_again, Exact(2), (command: text, message: text);
        /// 265 RPL_LOCALUSERS - the counts are optional on older servers
        265 => LocalUsers, on_local_users, Between(1, 3),
            (current: opt, max: opt, message: last);
        /// 266 RPL_GLOBALUSERS
        266 => GlobalUsers, on_global_users, Between(1, 3),
            (current: opt, max: opt, message: last);
        /// 271 RPL_SILELIST
        271 => SilenceList, on_silence_list, Any, (arguments: rest);
        /// 272 RPL_ENDOFSILELIST
        272 => EndOfSilenceList, on_end_of_silence_list, Exact(1), (message: text);
        /// 276 RPL_WHOISCERTFP
        276 => WhoisCertFp, on_whois_cert_fp, Exact(2), (nickname: text, message: text);
        /// 281 RPL_ACCEPTLIST
        281 => AcceptList, on_accept_list, Any, (nicknames: rest);
        /// 282 RPL_ENDOFACCEPT
        282 => EndOfAccept, on_end_of_accept, Exact(1), (message: text);

        // === Command replies (300-399) ===

        /// 301 RPL_AWAY
        301 => Away, on_away, Exact(2), (nickname: text, message: text);
        /// 302 RPL_USERHOST
        302 => UserHost, on_user_host, Exact(1), (replies: text);
        /// 303 RPL_ISON
        303 => IsOn, on_is_on, Exact(1), (nicknames: text);
        /// 305 RPL_UNAWAY
        305 => UnAway, on_un_away, Exact(1), (message: text);
        /// 306 RPL_NOWAWAY
        306 => NowAway, on_now_away, Exact(1), (message: text);
        /// 311 RPL_WHOISUSER
        311 => WhoisUser, on_whois_user, Exact(5),
            (nickname: text, username: text, host: text, unused: text, realname: text);
        /// 312 RPL_WHOISSERVER
        312 => WhoisServer, on_whois_server, Exact(3), (nickname: text, server: text, info: text);
        /// 313 RPL_WHOISOPERATOR
        313 => WhoisOperator, on_whois_operator, Exact(2), (nickname: text, message: text);
        /// 314 RPL_WHOWASUSER
        314 => WhowasUser, on_whowas_user, Exact(5),
            (nickname: text, username: text, host: text, unused: text, realname: text);
        /// 315 RPL_ENDOFWHO
        315 => EndOfWho, on_end_of_who, Exact(2), (mask: text, message: text);
        /// 317 RPL_WHOISIDLE - signon time is optional
        317 => WhoisIdle, on_whois_idle, Between(3, 4),
            (nickname: text, idle: text, signon: opt, message: last);
        /// 318 RPL_ENDOFWHOIS
        318 => EndOfWhois, on_end_of_whois, Exact(2), (nickname: text, message: text);
        /// 319 RPL_WHOISCHANNELS
        319 => WhoisChannels, on_whois_channels, Exact(2), (nickname: text, channels: text);
        /// 321 RPL_LISTSTART
        321 => ListStart, on_list_start, Any, (arguments: rest);
        /// 322 RPL_LIST
        322 => ListEntry, on_list_entry, Exact(3), (channel: text, visible: text, topic: text);
        /// 323 RPL_LISTEND
        323 => ListEnd, on_list_end, Exact(1), (message: text);
        /// 324 RPL_CHANNELMODEIS
        324 => ChannelModeIs, on_channel_mode_is, AtLeast(2),
            (channel: text, modes: text, arguments: rest);
        /// 325 RPL_UNIQOPIS
        325 => UniqOpIs, on_uniq_op_is, Exact(2), (channel: text, nickname: text);
        /// 329 RPL_CREATIONTIME
        329 => CreationTime, on_creation_time, Exact(2), (channel: text, created: text);
        /// 330 RPL_WHOISACCOUNT
        330 => WhoisAccount, on_whois_account, Exact(3),
            (nickname: text, account: text, message: text);
        /// 331 RPL_NOTOPIC
        331 => NoTopic, on_no_topic, Exact(2), (channel: text, message: text);
        /// 332 RPL_TOPIC
        332 => Topic, on_topic, Exact(2), (channel: text, topic: text);
        /// 333 RPL_TOPICWHOTIME
        333 => TopicWhoTime, on_topic_who_time, Exact(3), (channel: text, setter: text, set_at: text);
        /// 335 RPL_WHOISBOT
        335 => WhoisBot, on_whois_bot, Exact(2), (nickname: text, message: text);
        /// 338 RPL_WHOISACTUALLY - layout varies between servers
        338 => WhoisActually, on_whois_actually, Any, (arguments: rest);
        /// 340 RPL_USERIP
        340 => UserIp, on_user_ip, Exact(1), (replies: text);
        /// 341 RPL_INVITING
        341 => Inviting, on_inviting, Exact(2), (nickname: text, channel: text);
        /// 342 RPL_SUMMONING
        342 => Summoning, on_summoning, Exact(2), (user: text, message: text);
        /// 346 RPL_INVITELIST
        346 => InviteList, on_invite_list, Between(2, 4),
            (channel: text, mask: text, setter: opt, set_at: opt);
        /// 347 RPL_ENDOFINVITELIST
        347 => EndOfInviteList, on_end_of_invite_list, Exact(2), (channel: text, message: text);
        /// 348 RPL_EXCEPTLIST
        348 => ExceptList, on_except_list, Between(2, 4),
            (channel: text, mask: text, setter: opt, set_at: opt);
        /// 349 RPL_ENDOFEXCEPTLIST
        349 => EndOfExceptList, on_end_of_except_list, Exact(2), (channel: text, message: text);
        /// 351 RPL_VERSION
        351 => Version, on_version, Exact(3), (version: text, server: text, comments: text);
        /// 352 RPL_WHOREPLY
        352 => WhoReply, on_who_reply, Exact(7),
            (channel: text, username: text, host: text, server: text, nickname: text, flags: text,
             info: text);
        /// 353 RPL_NAMREPLY - passed through verbatim
        353 => NamReply, on_nam_reply, Any, (arguments: rest);
        /// 354 RPL_WHOSPCRPL - WHOX fields depend on the query
        354 => WhoSpcRpl, on_who_spc_rpl, Any, (arguments: rest);
        /// 364 RPL_LINKS
        364 => Links, on_links, Exact(3), (mask: text, server: text, info: text);
        /// 365 RPL_ENDOFLINKS
        365 => EndOfLinks, on_end_of_links, Exact(2), (mask: text, message: text);
        /// 366 RPL_ENDOFNAMES
        366 => EndOfNames, on_end_of_names, Exact(2), (channel: text, message: text);
        /// 367 RPL_BANLIST
        367 => BanList, on_ban_list, Between(2, 4),
            (channel: text, mask: text, setter: opt, set_at: opt);
        /// 368 RPL_ENDOFBANLIST
        368 => EndOfBanList, on_end_of_ban_list, Exact(2), (channel: text, message: text);
        /// 369 RPL_ENDOFWHOWAS
        369 => EndOfWhowas, on_end_of_whowas, Exact(2), (nickname: text, message: text);
        /// 371 RPL_INFO
        371 => Info, on_info, Exact(1), (message: text);
        /// 372 RPL_MOTD
        372 => Motd, on_motd, Exact(1), (line: text);
        /// 374 RPL_ENDOFINFO
        374 => EndOfInfo, on_end_of_info, Exact(1), (message: text);
        /// 375 RPL_MOTDSTART
        375 => MotdStart, on_motd_start, Exact(1), (message: text);
        /// 376 RPL_ENDOFMOTD
        376 => EndOfMotd, on_end_of_motd, Exact(1), (message: text);
        /// 378 RPL_WHOISHOST
        378 => WhoisHost, on_whois_host, Exact(2), (nickname: text, message: text);
        /// 379 RPL_WHOISMODES
        379 => WhoisModes, on_whois_modes, Exact(2), (nickname: text, message: text);
        /// 381 RPL_YOUREOPER
        381 => YoureOper, on_youre_oper, Exact(1), (message: text);
        /// 382 RPL_REHASHING
        382 => Rehashing, on_rehashing, Exact(2), (config_file: text, message: text);
        /// 383 RPL_YOURESERVICE
        383 => YoureService, on_youre_service, Exact(1), (message: text);
        /// 391 RPL_TIME - timestamp and offset are optional
        391 => Time, on_time, Between(2, 4),
            (server: text, timestamp: opt, offset: opt, message: last);
        /// 392 RPL_USERSSTART
        392 => UsersStart, on_users_start, Exact(1), (message: text);
        /// 393 RPL_USERS
        393 => Users, on_users, Exact(1), (message: text);
        /// 394 RPL_ENDOFUSERS
        394 => EndOfUsers, on_end_of_users, Exact(1), (message: text);
        /// 395 RPL_NOUSERS
        395 => NoUsers, on_no_users, Exact(1), (message: text);
        /// 396 RPL_HOSTHIDDEN
        396 => HostHidden, on_host_hidden, Exact(2), (host: text, message: text);

        // === Error replies (400-599) ===

        /// 400 ERR_UNKNOWNERROR
        400 => UnknownError, on_unknown_error, AtLeast(2),
            (command: text, subcommands: rest, message: last);
        /// 401 ERR_NOSUCHNICK
        401 => NoSuchNick, on_no_such_nick, Exact(2), (nickname: text, message: text);
        /// 402 ERR_NOSUCHSERVER
        402 => NoSuchServer, on_no_such_server, Exact(2), (server: text, message: text);
        /// 403 ERR_NOSUCHCHANNEL
        403 => NoSuchChannel, on_no_such_channel, Exact(2), (channel: text, message: text);
        /// 404 ERR_CANNOTSENDTOCHAN
        404 => CannotSendToChan, on_cannot_send_to_chan, Exact(2), (channel: text, message: text);
        /// 405 ERR_TOOMANYCHANNELS
        405 => TooManyChannels, on_too_many_channels, Exact(2), (channel: text, message: text);
        /// 406 ERR_WASNOSUCHNICK
        406 => WasNoSuchNick, on_was_no_such_nick, Exact(2), (nickname: text, message: text);
        /// 407 ERR_TOOMANYTARGETS
        407 => TooManyTargets, on_too_many_targets, Exact(2), (target: text, message: text);
        /// 408 ERR_NOSUCHSERVICE
        408 => NoSuchService, on_no_such_service, Exact(2), (service: text, message: text);
        /// 409 ERR_NOORIGIN
        409 => NoOrigin, on_no_origin, Exact(1), (message: text);
        /// 410 ERR_INVALIDCAPCMD
        410 => InvalidCapCmd, on_invalid_cap_cmd, Exact(2), (subcommand: text, message: text);
        /// 411 ERR_NORECIPIENT
        411 => NoRecipient, on_no_recipient, Exact(1), (message: text);
        /// 412 ERR_NOTEXTTOSEND
        412 => NoTextToSend, on_no_text_to_send, Exact(1), (message: text);
        /// 413 ERR_NOTOPLEVEL
        413 => NoTopLevel, on_no_top_level, Exact(2), (mask: text, message: text);
        /// 414 ERR_WILDTOPLEVEL
        414 => WildTopLevel, on_wild_top_level, Exact(2), (mask: text, message: text);
        /// 415 ERR_BADMASK
        415 => BadMask, on_bad_mask, Exact(2), (mask: text, message: text);
        /// 417 ERR_INPUTTOOLONG
        417 => InputTooLong, on_input_too_long, Exact(1), (message: text);
        /// 421 ERR_UNKNOWNCOMMAND
        421 => UnknownCommandError, on_unknown_command_error, Exact(2),
            (command: text, message: text);
        /// 422 ERR_NOMOTD
        422 => NoMotd, on_no_motd, Exact(1), (message: text);
        /// 423 ERR_NOADMININFO
        423 => NoAdminInfo, on_no_admin_info, Exact(2), (server: text, message: text);
        /// 424 ERR_FILEERROR
        424 => FileError, on_file_error, Exact(1), (message: text);
        /// 431 ERR_NONICKNAMEGIVEN
        431 => NoNicknameGiven, on_no_nickname_given, Exact(1), (message: text);
        /// 432 ERR_ERRONEUSNICKNAME
        432 => ErroneousNickname, on_erroneous_nickname, Exact(2), (nickname: text, message: text);
        /// 433 ERR_NICKNAMEINUSE
        433 => NicknameInUse, on_nickname_in_use, Exact(2), (nickname: text, message: text);
        /// 436 ERR_NICKCOLLISION
        436 => NickCollision, on_nick_collision, Exact(2), (nickname: text, message: text);
        /// 437 ERR_UNAVAILRESOURCE
        437 => UnavailResource, on_unavail_resource, Exact(2), (resource: text, message: text);
        /// 441 ERR_USERNOTINCHANNEL
        441 => UserNotInChannel, on_user_not_in_channel, Exact(3),
            (nickname: text, channel: text, message: text);
        /// 442 ERR_NOTONCHANNEL
        442 => NotOnChannel, on_not_on_channel, Exact(2), (channel: text, message: text);
        /// 443 ERR_USERONCHANNEL
        443 => UserOnChannel, on_user_on_channel, Exact(3),
            (nickname: text, channel: text, message: text);
        /// 444 ERR_NOLOGIN
        444 => NoLogin, on_no_login, Exact(2), (user: text, message: text);
        /// 445 ERR_SUMMONDISABLED
        445 => SummonDisabled, on_summon_disabled, Exact(1), (message: text);
        /// 446 ERR_USERSDISABLED
        446 => UsersDisabled, on_users_disabled, Exact(1), (message: text);
        /// 447 ERR_NONICKCHANGE - some servers name the channel first
        447 => NoNickChange, on_no_nick_change, AtLeast(1), (arguments: rest, message: last);
        /// 451 ERR_NOTREGISTERED
        451 => NotRegistered, on_not_registered, Exact(1), (message: text);
        /// 456 ERR_ACCEPTFULL
        456 => AcceptFull, on_accept_full, Exact(1), (message: text);
        /// 457 ERR_ACCEPTEXIST
        457 => AcceptExist, on_accept_exist, Exact(2), (nickname: text, message: text);
        /// 458 ERR_ACCEPTNOT
        458 => AcceptNot, on_accept_not, Exact(2), (nickname: text, message: text);
        /// 461 ERR_NEEDMOREPARAMS
        461 => NeedMoreParams, on_need_more_params, Exact(2), (command: text, message: text);
        /// 462 ERR_ALREADYREGISTERED
        462 => AlreadyRegistered, on_already_registered, Exact(1), (message: text);
        /// 463 ERR_NOPERMFORHOST
        463 => NoPermForHost, on_no_perm_for_host, Exact(1), (message: text);
        /// 464 ERR_PASSWDMISMATCH
        464 => PasswdMismatch, on_passwd_mismatch, Exact(1), (message: text);
        /// 465 ERR_YOUREBANNEDCREEP
        465 => YoureBannedCreep, on_youre_banned_creep, Exact(1), (message: text);
        /// 466 ERR_YOUWILLBEBANNED
        466 => YouWillBeBanned, on_you_will_be_banned, Exact(1), (message: text);
        /// 467 ERR_KEYSET
        467 => KeySet, on_key_set, Exact(2), (channel: text, message: text);
        /// 471 ERR_CHANNELISFULL
        471 => ChannelIsFull, on_channel_is_full, Exact(2), (channel: text, message: text);
        /// 472 ERR_UNKNOWNMODE
        472 => UnknownMode, on_unknown_mode, Exact(2), (mode: text, message: text);
        /// 473 ERR_INVITEONLYCHAN
        473 => InviteOnlyChan, on_invite_only_chan, Exact(2), (channel: text, message: text);
        /// 474 ERR_BANNEDFROMCHAN
        474 => BannedFromChan, on_banned_from_chan, Exact(2), (channel: text, message: text);
        /// 475 ERR_BADCHANNELKEY
        475 => BadChannelKey, on_bad_channel_key, Exact(2), (channel: text, message: text);
        /// 476 ERR_BADCHANMASK
        476 => BadChanMask, on_bad_chan_mask, Exact(2), (channel: text, message: text);
        /// 477 ERR_NEEDREGGEDNICK
        477 => NeedReggedNick, on_need_regged_nick, Exact(2), (channel: text, message: text);
        /// 478 ERR_BANLISTFULL
        478 => BanListFull, on_ban_list_full, Exact(3), (channel: text, mask: text, message: text);
        /// 479 ERR_BADCHANNAME
        479 => BadChanName, on_bad_chan_name, Exact(2), (channel: text, message: text);
        /// 481 ERR_NOPRIVILEGES
        481 => NoPrivileges, on_no_privileges, Exact(1), (message: text);
        /// 482 ERR_CHANOPRIVSNEEDED
        482 => ChanOPrivsNeeded, on_chan_o_privs_needed, Exact(2), (channel: text, message: text);
        /// 483 ERR_CANTKILLSERVER
        483 => CantKillServer, on_cant_kill_server, Exact(1), (message: text);
        /// 484 ERR_RESTRICTED
        484 => Restricted, on_restricted, Exact(1), (message: text);
        /// 485 ERR_UNIQOPPRIVSNEEDED
        485 => UniqOpPrivsNeeded, on_uniq_op_privs_needed, Exact(1), (message: text);
        /// 489 ERR_SECUREONLYCHAN
        489 => SecureOnlyChan, on_secure_only_chan, Exact(2), (channel: text, message: text);
        /// 491 ERR_NOOPERHOST
        491 => NoOperHost, on_no_oper_host, Exact(1), (message: text);
        /// 501 ERR_UMODEUNKNOWNFLAG
        501 => UModeUnknownFlag, on_u_mode_unknown_flag, Exact(1), (message: text);
        /// 502 ERR_USERSDONTMATCH
        502 => UsersDontMatch, on_users_dont_match, Exact(1), (message: text);
        /// 511 ERR_SILELISTFULL
        511 => SilenceListFull, on_silence_list_full, Exact(2), (mask: text, message: text);
        /// 520 ERR_OPERONLY
        520 => OperOnly, on_oper_only, Exact(2), (channel: text, message: text);
        /// 524 ERR_HELPNOTFOUND
        524 => HelpNotFound, on_help_not_found, Exact(2), (subject: text, message: text);
        /// 525 ERR_INVALIDKEY
        525 => InvalidKey, on_invalid_key, Exact(2), (channel: text, message: text);
        /// 573 ERR_CANNOTSENDRP
        573 => CannotSendRp, on_cannot_send_rp, Exact(2), (channel: text, message: text);

        // === Extended replies (600-799) ===

        /// 606 RPL_MAP
        606 => Map, on_map, Any, (arguments: rest);
        /// 607 RPL_MAPEND
        607 => MapEnd, on_map_end, Exact(1), (message: text);
        /// 632 RPL_RULESTART
        632 => RuleStart, on_rule_start, Exact(1), (message: text);
        /// 633 RPL_RULES
        633 => Rules, on_rules, Exact(1), (line: text);
        /// 634 RPL_ENDOFRULES
        634 => EndOfRules, on_end_of_rules, Exact(1), (message: text);
        /// 635 ERR_NORULES
        635 => NoRules, on_no_rules, Exact(1), (message: text);
        /// 646 RPL_STATSPLINE
        646 => StatsPLine, on_stats_p_line, Any, (arguments: rest);
        /// 670 RPL_STARTTLS
        670 => StartTls, on_start_tls, Exact(1), (message: text);
        /// 671 RPL_WHOISSECURE
        671 => WhoisSecure, on_whois_secure, Exact(2), (nickname: text, message: text);
        /// 691 ERR_STARTTLS
        691 => StartTlsFailed, on_start_tls_failed, Exact(1), (message: text);
        /// 696 ERR_INVALIDMODEPARAM
        696 => InvalidModeParam, on_invalid_mode_param, Exact(4),
            (target: text, mode: text, parameter: text, message: text);
        /// 704 RPL_HELPSTART
        704 => HelpStart, on_help_start, Exact(2), (subject: text, line: text);
        /// 705 RPL_HELPTXT
        705 => HelpText, on_help_text, Exact(2), (subject: text, line: text);
        /// 706 RPL_ENDOFHELP
        706 => EndOfHelp, on_end_of_help, Exact(2), (subject: text, line: text);
        /// 710 RPL_KNOCK
        710 => Knock, on_knock, Exact(3), (channel: text, source: text, message: text);
        /// 711 RPL_KNOCKDLVR
        711 => KnockDelivered, on_knock_delivered, Exact(2), (channel: text, message: text);
        /// 712 ERR_TOOMANYKNOCK
        712 => TooManyKnock, on_too_many_knock, Exact(2), (channel: text, message: text);
        /// 713 ERR_CHANOPEN
        713 => ChanOpen, on_chan_open, Exact(2), (channel: text, message: text);
        /// 714 ERR_KNOCKONCHAN
        714 => KnockOnChan, on_knock_on_chan, Exact(2), (channel: text, message: text);
        /// 723 ERR_NOPRIVS
        723 => NoPrivs, on_no_privs, Exact(2), (privilege: text, message: text);
        /// 728 RPL_QUIETLIST
        728 => QuietList, on_quiet_list, Between(3, 5),
            (channel: text, mode: text, mask: text, setter: opt, set_at: opt);
        /// 729 RPL_ENDOFQUIETLIST
        729 => EndOfQuietList, on_end_of_quiet_list, Exact(3), (channel: text, mode: text, message: text);
        /// 730 RPL_MONONLINE
        730 => MonOnline, on_mon_online, Exact(1), (targets: list);
        /// 731 RPL_MONOFFLINE
        731 => MonOffline, on_mon_offline, Exact(1), (targets: list);
        /// 732 RPL_MONLIST
        732 => MonList, on_mon_list, Exact(1), (targets: list);
        /// 733 RPL_ENDOFMONLIST
        733 => EndOfMonList, on_end_of_mon_list, Exact(1), (message: text);
        /// 734 ERR_MONLISTFULL
        734 => MonListFull, on_mon_list_full, Exact(3), (limit: text, targets: list, message: text);
        /// 760 RPL_WHOISKEYVALUE
        760 => WhoisKeyValue, on_whois_key_value, Exact(4),
            (target: text, key: text, visibility: text, value: text);
        /// 761 RPL_KEYVALUE - the value is absent when the key is unset
        761 => KeyValue, on_key_value, Between(3, 4),
            (target: text, key: text, visibility: text, value: opt);
        /// 762 RPL_METADATAEND
        762 => MetadataEnd, on_metadata_end, Exact(1), (message: text);
        /// 764 ERR_METADATALIMIT
        764 => MetadataLimit, on_metadata_limit, Exact(2), (target: text, message: text);
        /// 765 ERR_TARGETINVALID
        765 => TargetInvalid, on_target_invalid, Exact(2), (target: text, message: text);
        /// 766 ERR_NOMATCHINGKEY
        766 => NoMatchingKey, on_no_matching_key, Exact(3), (target: text, key: text, message: text);
        /// 767 ERR_KEYINVALID
        767 => KeyInvalid, on_key_invalid, Exact(2), (key: text, message: text);
        /// 768 ERR_KEYNOTSET
        768 => KeyNotSet, on_key_not_set, Exact(3), (target: text, key: text, message: text);
        /// 769 ERR_KEYNOPERMISSION
        769 => KeyNoPermission, on_key_no_permission, Exact(3), (target: text, key: text, message: text);

        // === SASL (900-908) ===

        /// 900 RPL_LOGGEDIN
        900 => LoggedIn, on_logged_in, Exact(3), (mask: text, account: text, message: text);
        /// 901 RPL_LOGGEDOUT
        901 => LoggedOut, on_logged_out, Exact(2), (mask: text, message: text);
        /// 902 ERR_NICKLOCKED
        902 => NickLocked, on_nick_locked, Exact(1), (message: text);
        /// 903 RPL_SASLSUCCESS
        903 => SaslSuccess, on_sasl_success, Exact(1), (message: text);
        /// 904 ERR_SASLFAIL
        904 => SaslFail, on_sasl_fail, Exact(1), (message: text);
        /// 905 ERR_SASLTOOLONG
        905 => SaslTooLong, on_sasl_too_long, Exact(1), (message: text);
        /// 906 ERR_SASLABORTED
        906 => SaslAborted, on_sasl_aborted, Exact(1), (message: text);
        /// 907 ERR_SASLALREADY
        907 => SaslAlready, on_sasl_already, Exact(1), (message: text);
        /// 908 RPL_SASLMECHS
        908 => SaslMechs, on_sasl_mechs, Exact(2), (mechanisms: list, message: text);
    }

    named {
        // === Registration ===

        /// PASS <password>
        "PASS" => Pass, on_pass, Exact(1), (password: text);
        /// NICK <nickname>
        "NICK" => Nick, on_nick, Exact(1), (nickname: text);
        /// USER <username> <mode> <unused> <realname>
        "USER" => User, on_user, Exact(4),
            (username: text, mode: text, unused: text, realname: text);
        /// OPER <name> <password>
        "OPER" => Oper, on_oper, Exact(2), (name: text, password: text);
        /// QUIT [<message>]
        "QUIT" => Quit, on_quit, Between(0, 1), (message: opt);
        /// ERROR <message>
        "ERROR" => Error, on_error, Exact(1), (message: text);

        // === Channels ===

        /// JOIN <channels> [<account> <realname>]; the extra arguments come
        /// from extended-join
        "JOIN" => Join, on_join, Between(1, 3), (channels: list, account: opt, realname: opt);
        /// PART <channels> [<message>]
        "PART" => Part, on_part, Between(1, 2), (channels: list, message: opt);
        /// KICK <channels> <users> [<comment>]
        "KICK" => Kick, on_kick, Between(2, 3), (channels: list, users: list, comment: opt);
        /// MODE <target> [<modes> [<arguments>...]]
        "MODE" => Mode, on_mode, AtLeast(1), (target: text, modes: opt, arguments: rest);
        /// TOPIC <channel> <topic>
        "TOPIC" => TopicChange, on_topic_change, Exact(2), (channel: text, topic: text);
        /// INVITE <nickname> <channel>
        "INVITE" => Invite, on_invite, Exact(2), (nickname: text, channel: text);
        /// NAMES [<channels> [<server>]]
        "NAMES" => Names, on_names, Between(0, 2), (channels: optlist, server: opt);
        /// LIST [<channels> [<server>]]
        "LIST" => List, on_list, Between(0, 2), (channels: optlist, server: opt);

        // === Messaging ===

        /// PRIVMSG <targets> <text>
        "PRIVMSG" => Privmsg, on_privmsg, Exact(2), (targets: list, message: text);
        /// NOTICE <targets> <text>
        "NOTICE" => Notice, on_notice, Exact(2), (targets: list, message: text);
        /// WALLOPS <message>
        "WALLOPS" => Wallops, on_wallops, Exact(1), (message: text);

        // === Queries ===

        /// WHO [<mask> [<flags>]]
        "WHO" => Who, on_who, Between(0, 2), (mask: opt, flags: opt);
        /// WHOIS [<server>] <mask>
        "WHOIS" => Whois, on_whois, Between(1, 2), (target: text, mask: opt);
        /// WHOWAS <nicknames> [<count> [<server>]]
        "WHOWAS" => Whowas, on_whowas, Between(1, 3),
            (nicknames: list, count: opt, server: opt);

        // === Connection upkeep ===

        /// PING <token> [<server>]
        "PING" => Ping, on_ping, Between(1, 2), (token: text, server: opt);
        /// PONG <server> [<token>]
        "PONG" => Pong, on_pong, Between(1, 2), (server: text, token: opt);
        /// KILL <nickname> <comment>
        "KILL" => Kill, on_kill, Exact(2), (nickname: text, comment: text);

        // === IRCv3 ===

        /// CAP <target> <subcommand> [<arguments>...]
        "CAP" => Cap, on_cap, AtLeast(2), (target: text, subcommand: text, arguments: rest);
        /// AUTHENTICATE <data>
        "AUTHENTICATE" => Authenticate, on_authenticate, Exact(1), (data: text);
        /// ACCOUNT <account> (account-notify, `*` when logged out)
        "ACCOUNT" => Account, on_account, Exact(1), (account: text);
        /// AWAY [<message>] (away-notify)
        "AWAY" => AwayNotify, on_away_notify, Between(0, 1), (message: opt);
        /// BATCH <+/-reference> [<type> <parameters>...]
        "BATCH" => Batch, on_batch, AtLeast(1), (reference: text, arguments: rest);
        /// CHGHOST <username> <host>
        "CHGHOST" => ChgHost, on_chg_host, Exact(2), (username: text, host: text);
        /// SETNAME <realname>
        "SETNAME" => SetName, on_set_name, Exact(1), (realname: text);
        /// TAGMSG <target>
        "TAGMSG" => TagMsg, on_tag_msg, Exact(1), (target: text);
        /// FAIL <command> <code> [<context>...] <description>
        "FAIL" => Fail, on_fail, AtLeast(3),
            (command: text, code: text, context: rest, description: last);
        /// WARN <command> <code> [<context>...] <description>
        "WARN" => Warn, on_warn, AtLeast(3),
            (command: text, code: text, context: rest, description: last);
        /// NOTE <command> <code> [<context>...] <description>
        "NOTE" => Note, on_note, AtLeast(3),
            (command: text, code: text, context: rest, description: last);
        /// RENAME <channel> <new name> [<reason>]
        "RENAME" => Rename, on_rename, Between(2, 3), (channel: text, new_name: text, reason: opt);
        /// ACK (labeled-response)
        "ACK" => Ack, on_ack, Exact(0), ();
    }

    fallback {
        /// Any numeric code without a row of its own.
        UnknownCode, on_unknown_code, (code: code, arguments: rest);
        /// Any command name without a row of its own.
        UnknownCommand, on_unknown_command, (command: text, arguments: rest);
    }
}
